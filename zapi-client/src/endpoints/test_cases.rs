//! # Test Case Endpoints
//!
//! Retrieval of test cases and their step lists.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::ZephyrClient;
use crate::error::Result;
use crate::models::{EntityKind, Page, ParseMode};

impl ZephyrClient {
  /// Get a test case by key, resolving its reference fields per `parse`.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_test_case(&self, test_case_key: &str, parse: ParseMode) -> Result<Value> {
    let payload = self.get(&format!("testcases/{test_case_key}"), &[]).await?;
    debug!("Queried test case {}", test_case_key);
    self.enrich(payload, EntityKind::TestCase, parse).await
  }

  /// Get the steps of a test case. Step payloads carry inline values
  /// already, so no enrichment applies.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_steps_in_test_case(&self, test_case_key: &str) -> Result<Page> {
    let payload = self.get(&format!("testcases/{test_case_key}/teststeps"), &[]).await?;
    Ok(serde_json::from_value(payload)?)
  }
}
