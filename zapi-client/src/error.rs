//! Error types shared by the Zephyr Scale and Jira clients.

use thiserror::Error;

/// Errors that can occur while talking to the upstream services
#[derive(Debug, Error)]
pub enum Error {
  /// A required credential or configuration value is missing.
  #[error("configuration error: {0}")]
  Config(String),

  /// The upstream service answered with a non-success HTTP status.
  #[error("HTTP {status}: {body}")]
  Transport {
    /// HTTP status code of the failed response
    status: u16,
    /// Response body text, as returned by the service
    body: String,
  },

  /// A request parameter or payload failed validation before any I/O.
  #[error("validation error: {0}")]
  Validation(String),

  /// The request could not be sent or the response could not be read.
  #[error(transparent)]
  Request(#[from] reqwest::Error),

  /// The response body did not match the expected shape.
  #[error("failed to decode response: {0}")]
  Decode(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;
