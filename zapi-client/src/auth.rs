//! Environment-based client construction.
//!
//! Credential lookup happens only here; the clients themselves take explicit
//! configuration. A missing credential fails fast with [`Error::Config`]
//! before any network request is attempted.

use std::env;

use crate::client::ZephyrClient;
use crate::consts::{
  ENV_JIRA_API_TOKEN, ENV_JIRA_BASE_URL, ENV_JIRA_USERNAME, ENV_ZEPHYR_API_TOKEN, ENV_ZEPHYR_BASE_URL, JIRA_BASE_URL,
  ZEPHYR_BASE_URL,
};
use crate::error::{Error, Result};
use crate::jira::{JiraAuth, JiraClient};

/// Read a required environment variable
fn require_env(name: &str) -> Result<String> {
  env::var(name).map_err(|_| Error::Config(format!("{name} environment variable not set")))
}

/// Read an optional environment variable, falling back to a default
fn env_or(name: &str, default: &str) -> String {
  env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Create a Jira client from `JIRA_USERNAME` and `JIRA_API_TOKEN`.
///
/// The base URL may be overridden with `JIRA_BASE_URL`.
pub fn create_jira_client_from_env() -> Result<JiraClient> {
  let username = require_env(ENV_JIRA_USERNAME)?;
  let api_token = require_env(ENV_JIRA_API_TOKEN)?;
  let base_url = env_or(ENV_JIRA_BASE_URL, JIRA_BASE_URL);

  Ok(JiraClient::new(&base_url, JiraAuth { username, api_token }))
}

/// Create a fully configured Zephyr Scale client from the environment.
///
/// Requires `ZEPHYR_API_TOKEN`, `JIRA_API_TOKEN`, and `JIRA_USERNAME`; the
/// base URLs may be overridden with `ZEPHYR_BASE_URL` and `JIRA_BASE_URL`.
pub fn create_zephyr_client_from_env() -> Result<ZephyrClient> {
  let token = require_env(ENV_ZEPHYR_API_TOKEN)?;
  let jira = create_jira_client_from_env()?;
  let base_url = env_or(ENV_ZEPHYR_BASE_URL, ZEPHYR_BASE_URL);

  Ok(ZephyrClient::new(&base_url, &token).with_jira(jira))
}
