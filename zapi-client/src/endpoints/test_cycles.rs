//! # Test Cycle Endpoints
//!
//! Retrieval and listing of test cycles.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::ZephyrClient;
use crate::error::{Error, Result};
use crate::models::{EntityKind, Page, ParseMode};

impl ZephyrClient {
  /// Get a test cycle by key, resolving its reference fields per `parse`.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_test_cycle(&self, test_cycle_key: &str, parse: ParseMode) -> Result<Value> {
    let payload = self.get(&format!("testcycles/{test_cycle_key}"), &[]).await?;
    debug!("Queried test cycle {}", test_cycle_key);
    self.enrich(payload, EntityKind::TestCycle, parse).await
  }

  /// List test cycles, optionally scoped to a project.
  ///
  /// The upstream pager requires `start_at` to be a multiple of
  /// `max_results`; a misaligned offset is rejected before any request.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_test_cycles(&self, project_key: Option<&str>, start_at: u64, max_results: u64) -> Result<Page> {
    if max_results == 0 {
      return Err(Error::Validation("maxResults must be positive".to_string()));
    }
    if start_at % max_results != 0 {
      return Err(Error::Validation("startAt must be a multiple of maxResults".to_string()));
    }

    let mut params = vec![("maxResults", max_results.to_string()), ("startAt", start_at.to_string())];
    if let Some(project_key) = project_key {
      params.push(("projectKey", project_key.to_string()));
    }

    let payload = self.get("testcycles", &params).await?;
    Ok(serde_json::from_value(payload)?)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::{Value, json};
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::ZephyrClient;
  use crate::error::Error;
  use crate::models::ParseMode;

  #[tokio::test]
  async fn test_list_test_cycles_rejects_misaligned_offset() -> anyhow::Result<()> {
    let client = ZephyrClient::new("http://localhost:9", "test_token");

    let result = client.list_test_cycles(Some("BLOCK"), 7, 20).await;
    match result {
      Err(Error::Validation(message)) => {
        assert!(message.contains("multiple of maxResults"));
      }
      other => panic!("expected a validation error, got {other:?}"),
    }

    Ok(())
  }

  #[tokio::test]
  async fn test_list_test_cycles_accepts_aligned_offset() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = ZephyrClient::new(&mock_server.uri(), "test_token");

    Mock::given(method("GET"))
      .and(path("/testcycles"))
      .and(query_param("maxResults", "20"))
      .and(query_param("startAt", "20"))
      .and(query_param("projectKey", "BLOCK"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "next": null,
          "startAt": 20,
          "maxResults": 20,
          "total": 21,
          "isLast": true,
          "values": [{"id": 17, "key": "BLOCK-R17"}]
      })))
      .mount(&mock_server)
      .await;

    let page = client.list_test_cycles(Some("BLOCK"), 20, 20).await?;
    assert_eq!(page.start_at, 20);
    assert_eq!(page.values[0]["key"], "BLOCK-R17");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_test_cycle_full_with_unset_owner() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    // No Jira client attached: the null owner must not trigger a user lookup.
    let client = ZephyrClient::new(&mock_server.uri(), "test_token");
    let base = mock_server.uri();

    Mock::given(method("GET"))
      .and(path("/testcycles/BLOCK-R21"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": 21,
          "key": "BLOCK-R21",
          "status": {"id": 8271, "self": format!("{base}/statuses/8271")},
          "owner": null
      })))
      .mount(&mock_server)
      .await;
    Mock::given(method("GET"))
      .and(path("/statuses/8271"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "In Progress"})))
      .mount(&mock_server)
      .await;

    let cycle = client.get_test_cycle("BLOCK-R21", ParseMode::Full).await?;
    assert_eq!(cycle["status"]["name"], "In Progress");
    assert_eq!(cycle["owner"], Value::Null);

    Ok(())
  }
}
