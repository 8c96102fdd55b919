//! # Jira HTTP Client
//!
//! Minimal Jira Cloud client used to resolve user-account references that
//! Zephyr Scale payloads carry as opaque account ids. Jira uses HTTP basic
//! auth (username + API token) where Zephyr Scale uses a bearer token.

use reqwest::{Client, header};
use serde_json::Value;
use tracing::debug;

use crate::client::into_json;
use crate::error::Result;

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  /// Jira username, usually an e-mail address
  pub username: String,
  /// Jira API token paired with the username
  pub api_token: String,
}

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) http: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: JiraAuth) -> Self {
    Self {
      http: Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  /// Look up a Jira user by account id
  pub async fn get_user(&self, account_id: &str) -> Result<Value> {
    let url = format!("{}/user", self.base_url);
    debug!("GET {} accountId={}", url, account_id);

    let response = self
      .http
      .get(&url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .header(header::USER_AGENT, crate::consts::USER_AGENT)
      .query(&[("accountId", account_id)])
      .send()
      .await?;

    into_json(response).await
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{basic_auth, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::error::Error;

  /// Test that the Jira client can be created with valid credentials
  #[test]
  fn test_jira_client_creation() {
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    };
    let client = JiraClient::new("https://test.atlassian.net/rest/api/2/", auth);

    assert_eq!(client.base_url, "https://test.atlassian.net/rest/api/2");
    assert_eq!(client.auth.username, "test_user");
    assert_eq!(client.auth.api_token, "test_token");
  }

  /// Test that user lookups use basic auth and the accountId query parameter
  #[tokio::test]
  async fn test_get_user() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    };
    let client = JiraClient::new(&mock_server.uri(), auth);

    Mock::given(method("GET"))
      .and(path("/user"))
      .and(query_param("accountId", "abc123"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "accountId": "abc123",
          "displayName": "Test User",
          "active": true
      })))
      .mount(&mock_server)
      .await;

    let user = client.get_user("abc123").await?;
    assert_eq!(user["displayName"], "Test User");

    Ok(())
  }

  /// Test that an unknown account id surfaces the upstream 404
  #[tokio::test]
  async fn test_get_user_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    };
    let client = JiraClient::new(&mock_server.uri(), auth);

    Mock::given(method("GET"))
      .and(path("/user"))
      .respond_with(ResponseTemplate::new(404).set_body_string("no such user"))
      .mount(&mock_server)
      .await;

    let result = client.get_user("missing").await;
    assert!(matches!(result, Err(Error::Transport { status: 404, .. })));

    Ok(())
  }
}
