//! Data model for the Zephyr Scale client.
//!
//! Entity payloads are schema-flexible (`serde_json::Value`); only the
//! collection envelope and the reference-resolution vocabulary are typed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Output fidelity for entity retrieval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
  /// Return the payload exactly as received
  #[default]
  Raw,
  /// Merge dereferenced data into each reference field, keeping the original keys
  Full,
  /// Replace each reference field with a single resolved scalar
  Simple,
}

/// The kinds of resource a reference field can point to.
///
/// Each kind declares where the referenced resource lives and which field of
/// the dereferenced object stands in for it in [`ParseMode::Simple`] output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
  /// A test case, test cycle, or test execution status
  Status,
  /// A test case priority
  Priority,
  /// A Jira project
  Project,
  /// A test environment
  Environment,
  /// A test case
  TestCase,
  /// A test cycle
  TestCycle,
}

impl RefKind {
  /// Collection segment of the endpoint serving this kind of resource
  fn collection(self) -> &'static str {
    match self {
      Self::Status => "statuses",
      Self::Priority => "priorities",
      Self::Project => "projects",
      Self::Environment => "environments",
      Self::TestCase => "testcases",
      Self::TestCycle => "testcycles",
    }
  }

  /// Endpoint path for the resource with the given id
  pub fn endpoint(self, id: &str) -> String {
    format!("{}/{}", self.collection(), id)
  }

  /// Field of the dereferenced object used as the simplified value
  pub fn scalar_field(self) -> &'static str {
    match self {
      Self::Project | Self::TestCase | Self::TestCycle => "key",
      _ => "name",
    }
  }
}

/// Normalized Jira account reference.
///
/// Upstream payloads carry user identity in two shapes: a bare account-id
/// string (`executedById`, `assignedToId` on executions) or an embedded
/// object with an `accountId` field (`owner` on cases and cycles). Both
/// normalize to this value before any lookup; account ids are opaque strings
/// and are never parsed as numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRef(String);

impl AccountRef {
  /// Normalize either user-reference shape. `Null` is an absent reference
  /// and normalizes to `None`.
  pub fn from_value(value: &Value) -> Result<Option<Self>> {
    match value {
      Value::Null => Ok(None),
      Value::String(id) => Ok(Some(Self(id.clone()))),
      Value::Object(map) => {
        let id = map
          .get("accountId")
          .and_then(Value::as_str)
          .ok_or_else(|| Error::Validation(format!("user reference is missing accountId: {value}")))?;
        Ok(Some(Self(id.to_string())))
      }
      other => Err(Error::Validation(format!(
        "user reference must be a string or an object, got: {other}"
      ))),
    }
  }

  /// The opaque Jira account id
  pub fn account_id(&self) -> &str {
    &self.0
  }
}

/// Entity family named by a Zephyr Scale key such as `BLOCK-T21`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
  /// `PROJ-T<n>` keys
  TestCase,
  /// `PROJ-R<n>` keys
  TestCycle,
  /// `PROJ-E<n>` keys
  TestExecution,
}

impl EntityKind {
  /// Classify an entity key by the letter after the project prefix.
  pub fn from_key(key: &str) -> Result<Self> {
    let invalid = || Error::Validation(format!("{key} is not a Zephyr Scale entity key"));

    let (project, rest) = key.split_once('-').ok_or_else(invalid)?;
    let mut chars = rest.chars();
    let kind = match chars.next() {
      Some('T') => Self::TestCase,
      Some('R') => Self::TestCycle,
      Some('E') => Self::TestExecution,
      _ => return Err(invalid()),
    };
    let number = chars.as_str();
    if project.is_empty() || number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
      return Err(invalid());
    }
    Ok(kind)
  }
}

/// Single page of a collection endpoint.
///
/// This is the upstream envelope and round-trips it unchanged; values stay
/// schema-flexible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
  /// URL of the next page, if any
  #[serde(default)]
  pub next: Option<String>,
  /// Index of the first returned item
  pub start_at: u64,
  /// Page size requested
  pub max_results: u64,
  /// Total number of items matching the query
  pub total: u64,
  /// Whether this is the final page
  pub is_last: bool,
  /// The items themselves
  pub values: Vec<Value>,
}

/// Status scope filter accepted by the statuses listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusType {
  /// Statuses applicable to test cases
  TestCase,
  /// Statuses applicable to test plans
  TestPlan,
  /// Statuses applicable to test cycles
  TestCycle,
  /// Statuses applicable to test executions
  TestExecution,
}

impl StatusType {
  /// Wire value of the `statusType` query parameter
  pub fn as_str(self) -> &'static str {
    match self {
      Self::TestCase => "TEST_CASE",
      Self::TestPlan => "TEST_PLAN",
      Self::TestCycle => "TEST_CYCLE",
      Self::TestExecution => "TEST_EXECUTION",
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_parse_mode_default_is_raw() {
    assert_eq!(ParseMode::default(), ParseMode::Raw);
  }

  #[test]
  fn test_ref_kind_endpoints() {
    assert_eq!(RefKind::Status.endpoint("3940035"), "statuses/3940035");
    assert_eq!(RefKind::Priority.endpoint("42"), "priorities/42");
    assert_eq!(RefKind::Project.endpoint("350001"), "projects/350001");
    assert_eq!(RefKind::Environment.endpoint("7"), "environments/7");
    assert_eq!(RefKind::TestCycle.endpoint("123"), "testcycles/123");
  }

  #[test]
  fn test_ref_kind_scalar_fields() {
    assert_eq!(RefKind::Status.scalar_field(), "name");
    assert_eq!(RefKind::Environment.scalar_field(), "name");
    assert_eq!(RefKind::Project.scalar_field(), "key");
    assert_eq!(RefKind::TestCase.scalar_field(), "key");
    assert_eq!(RefKind::TestCycle.scalar_field(), "key");
  }

  #[test]
  fn test_account_ref_normalizes_both_shapes() {
    let from_string = AccountRef::from_value(&json!("abc123")).unwrap().unwrap();
    let from_object = AccountRef::from_value(&json!({"accountId": "abc123"}))
      .unwrap()
      .unwrap();

    assert_eq!(from_string, from_object);
    assert_eq!(from_string.account_id(), "abc123");
  }

  #[test]
  fn test_account_ref_null_is_absent() {
    assert!(AccountRef::from_value(&Value::Null).unwrap().is_none());
  }

  #[test]
  fn test_account_ref_rejects_bad_shapes() {
    assert!(AccountRef::from_value(&json!({"displayName": "no id"})).is_err());
    assert!(AccountRef::from_value(&json!(42)).is_err());
  }

  #[test]
  fn test_entity_kind_from_key() {
    assert_eq!(EntityKind::from_key("BLOCK-T21").unwrap(), EntityKind::TestCase);
    assert_eq!(EntityKind::from_key("BLOCK-R21").unwrap(), EntityKind::TestCycle);
    assert_eq!(EntityKind::from_key("BLOCK-E192").unwrap(), EntityKind::TestExecution);
  }

  #[test]
  fn test_entity_kind_rejects_malformed_keys() {
    for key in ["BLOCK", "BLOCK-X21", "BLOCK-T", "BLOCK-Tabc", "-T21", "BLOCK-21"] {
      assert!(EntityKind::from_key(key).is_err(), "{key} should not classify");
    }
  }

  #[test]
  fn test_page_round_trips_the_envelope() {
    let envelope = json!({
        "next": null,
        "startAt": 0,
        "maxResults": 20,
        "total": 1,
        "isLast": true,
        "values": [{"id": 1, "key": "BLOCK-R17"}]
    });

    let page: Page = serde_json::from_value(envelope.clone()).unwrap();
    assert_eq!(page.max_results, 20);
    assert!(page.is_last);
    assert_eq!(page.values.len(), 1);

    assert_eq!(serde_json::to_value(&page).unwrap(), envelope);
  }

  #[test]
  fn test_status_type_wire_values() {
    assert_eq!(StatusType::TestCase.as_str(), "TEST_CASE");
    assert_eq!(StatusType::TestExecution.as_str(), "TEST_EXECUTION");
  }
}
