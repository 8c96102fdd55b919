//! # Status Endpoints
//!
//! Direct access to the status catalogue. The enrichment layer resolves
//! individual statuses through the same endpoint via its reference kind.

use serde_json::Value;
use tracing::instrument;

use crate::client::ZephyrClient;
use crate::error::Result;
use crate::models::{Page, RefKind, StatusType};

impl ZephyrClient {
  /// Get a single status by id
  #[instrument(skip(self), level = "debug")]
  pub async fn get_status(&self, status_id: u64) -> Result<Value> {
    self.get(&RefKind::Status.endpoint(&status_id.to_string()), &[]).await
  }

  /// List the available statuses, optionally filtered by scope
  #[instrument(skip(self), level = "debug")]
  pub async fn get_statuses(&self, status_type: Option<StatusType>, max_results: u64) -> Result<Page> {
    let mut params = vec![("maxResults", max_results.to_string())];
    if let Some(status_type) = status_type {
      params.push(("statusType", status_type.as_str().to_string()));
    }

    let payload = self.get("statuses", &params).await?;
    Ok(serde_json::from_value(payload)?)
  }
}
