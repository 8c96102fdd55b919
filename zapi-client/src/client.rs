//! # Zephyr Scale HTTP Client
//!
//! Transport for the Zephyr Scale Cloud API. Requests carry a bearer token;
//! any non-success response surfaces as [`Error::Transport`] with the status
//! code and body.

use reqwest::{Client, Response, header};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::jira::JiraClient;

/// Represents a Zephyr Scale API client
pub struct ZephyrClient {
  pub(crate) http: Client,
  pub(crate) base_url: String,
  pub(crate) token: String,
  pub(crate) jira: Option<JiraClient>,
}

impl ZephyrClient {
  /// Create a new Zephyr Scale client
  pub fn new(base_url: &str, token: &str) -> Self {
    Self {
      http: Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
      token: token.to_string(),
      jira: None,
    }
  }

  /// Attach the Jira client used to resolve user-account references
  #[must_use]
  pub fn with_jira(mut self, jira: JiraClient) -> Self {
    self.jira = Some(jira);
    self
  }

  /// Base URL this client talks to, without a trailing slash
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Issue an authenticated GET and decode the JSON body.
  ///
  /// Single attempt; a throttling or error response is returned to the
  /// caller unchanged as [`Error::Transport`].
  pub(crate) async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
    let url = format!("{}/{}", self.base_url, endpoint);
    debug!("GET {}", url);

    let response = self
      .http
      .get(&url)
      .bearer_auth(&self.token)
      .header(header::USER_AGENT, crate::consts::USER_AGENT)
      .query(params)
      .send()
      .await?;

    into_json(response).await
  }
}

/// Decode a response body, mapping non-2xx statuses to [`Error::Transport`]
pub(crate) async fn into_json(response: Response) -> Result<Value> {
  let status = response.status();
  if !status.is_success() {
    let body = response.text().await.unwrap_or_default();
    return Err(Error::Transport {
      status: status.as_u16(),
      body,
    });
  }

  Ok(response.json::<Value>().await?)
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  /// Test that the client can be created and normalizes the base URL
  #[test]
  fn test_zephyr_client_creation() {
    let client = ZephyrClient::new("https://api.zephyrscale.smartbear.com/v2/", "test_token");

    assert_eq!(client.base_url(), "https://api.zephyrscale.smartbear.com/v2");
    assert_eq!(client.token, "test_token");
    assert!(client.jira.is_none());
  }

  /// Test that requests carry the bearer token
  #[tokio::test]
  async fn test_zephyr_client_auth() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = ZephyrClient::new(&mock_server.uri(), "test_token");

    Mock::given(method("GET"))
      .and(path("/statuses/1"))
      .and(header("Authorization", "Bearer test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": 1,
          "name": "Pass"
      })))
      .mount(&mock_server)
      .await;

    let status = client.get("statuses/1", &[]).await?;
    assert_eq!(status["name"], "Pass");

    Ok(())
  }

  /// Test that a non-2xx response surfaces as a transport error with status and body
  #[tokio::test]
  async fn test_non_success_becomes_transport_error() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = ZephyrClient::new(&mock_server.uri(), "test_token");

    Mock::given(method("GET"))
      .and(path("/statuses/1"))
      .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
      .mount(&mock_server)
      .await;

    let result = client.get("statuses/1", &[]).await;
    match result {
      Err(Error::Transport { status, body }) => {
        assert_eq!(status, 500);
        assert_eq!(body, "upstream exploded");
      }
      other => panic!("expected a transport error, got {other:?}"),
    }

    Ok(())
  }
}
