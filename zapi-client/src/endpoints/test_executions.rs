//! # Test Execution Endpoints
//!
//! Retrieval and listing of test executions. Executions are the most
//! reference-heavy entity: they point at their project, environment, test
//! case, test cycle, and status, and carry user identity as bare account-id
//! strings rather than embedded objects.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::ZephyrClient;
use crate::error::{Error, Result};
use crate::models::{EntityKind, Page, ParseMode};
use crate::resolve::extract_test_case_from_test_execution;

impl ZephyrClient {
  /// Get a test execution by key, resolving its reference fields per `parse`.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_test_execution(&self, test_execution_key: &str, parse: ParseMode) -> Result<Value> {
    let payload = self.get(&format!("testexecutions/{test_execution_key}"), &[]).await?;
    debug!("Queried test execution {}", test_execution_key);
    self.enrich(payload, EntityKind::TestExecution, parse).await
  }

  /// Get the steps of a test execution. Step payloads carry inline values
  /// already, so no enrichment applies.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_steps_in_test_execution(&self, test_execution_key: &str) -> Result<Page> {
    let payload = self
      .get(&format!("testexecutions/{test_execution_key}/teststeps"), &[])
      .await?;
    Ok(serde_json::from_value(payload)?)
  }

  /// List the test executions belonging to a test cycle or a test case.
  ///
  /// `key` is classified by its shape (`PROJ-R…` filters by test cycle,
  /// `PROJ-T…` by test case). With `only_last`, only the last listed
  /// execution of each test case is kept.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_test_executions(
    &self,
    key: &str,
    max_results: u64,
    only_last: bool,
    parse: ParseMode,
  ) -> Result<Page> {
    let filter = match EntityKind::from_key(key)? {
      EntityKind::TestCycle => "testCycle",
      EntityKind::TestCase => "testCase",
      EntityKind::TestExecution => {
        return Err(Error::Validation(format!(
          "{key} names a test execution; expected a test case or test cycle key"
        )));
      }
    };

    let params = [(filter, key.to_string()), ("maxResults", max_results.to_string())];
    let payload = self.get("testexecutions", &params).await?;
    let mut page: Page = serde_json::from_value(payload)?;

    if only_last {
      page.values = keep_last_per_test_case(page.values)?;
      page.total = page.values.len() as u64;
    }

    if parse != ParseMode::Raw {
      let mut enriched = Vec::with_capacity(page.values.len());
      for execution in page.values {
        enriched.push(self.enrich(execution, EntityKind::TestExecution, parse).await?);
      }
      page.values = enriched;
    }

    Ok(page)
  }
}

/// Keep only the last listed execution of each test case, preserving the
/// order in which the test cases first appeared.
fn keep_last_per_test_case(values: Vec<Value>) -> Result<Vec<Value>> {
  let mut last: Vec<(String, Value)> = Vec::new();
  for execution in values {
    let (test_case_key, _) = extract_test_case_from_test_execution(&execution)?;
    if let Some(slot) = last.iter_mut().find(|(key, _)| *key == test_case_key) {
      slot.1 = execution;
    } else {
      last.push((test_case_key, execution));
    }
  }
  Ok(last.into_iter().map(|(_, execution)| execution).collect())
}
