//! # Reference Resolution
//!
//! Zephyr Scale payloads point at other resources two ways: linked objects
//! carrying a `self` URL, and bare ids (numeric for statuses, priorities,
//! projects, and environments; opaque strings for Jira accounts). This module
//! turns either shape into enriched data at the requested fidelity:
//! [`ParseMode::Full`] merges the dereferenced resource into the original
//! reference (original keys win), [`ParseMode::Simple`] keeps only the
//! designated scalar, and [`ParseMode::Raw`] touches nothing.
//!
//! Absent (`null`) references pass through untouched in every mode. Any
//! failed per-field fetch fails the whole retrieval; there is no partial
//! enrichment.

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::client::ZephyrClient;
use crate::error::{Error, Result};
use crate::models::{AccountRef, EntityKind, ParseMode, RefKind};

impl EntityKind {
  /// Reference fields walked during enrichment, with the kind each resolves to
  pub(crate) fn reference_fields(self) -> &'static [(&'static str, RefKind)] {
    match self {
      Self::TestCase => &[
        ("project", RefKind::Project),
        ("priority", RefKind::Priority),
        ("status", RefKind::Status),
      ],
      Self::TestCycle => &[("project", RefKind::Project), ("status", RefKind::Status)],
      Self::TestExecution => &[
        ("project", RefKind::Project),
        ("environment", RefKind::Environment),
        ("testCase", RefKind::TestCase),
        ("testCycle", RefKind::TestCycle),
        ("testExecutionStatus", RefKind::Status),
      ],
    }
  }

  /// Fields carrying Jira user identity, in either string or object shape
  pub(crate) fn user_fields(self) -> &'static [&'static str] {
    match self {
      Self::TestCase | Self::TestCycle => &["owner"],
      Self::TestExecution => &["executedById", "assignedToId"],
    }
  }
}

/// Merge two objects; `original` keys win, `fetched` keys are added.
///
/// A non-object `original` (e.g. a bare id that has no fields of its own)
/// contributes nothing beyond what the fetched object already carries.
fn merge(original: &Value, fetched: Value) -> Value {
  let mut out = match fetched {
    Value::Object(map) => map,
    _ => Map::new(),
  };
  if let Value::Object(original) = original {
    for (key, value) in original {
      out.insert(key.clone(), value.clone());
    }
  }
  Value::Object(out)
}

/// Render an id the way the upstream API expects it in a path segment:
/// integers without floating-point artifacts, strings passed through opaquely.
fn format_id(id: &Value) -> Result<String> {
  if let Some(id) = id.as_str() {
    return Ok(id.to_string());
  }
  if let Some(id) = id.as_i64() {
    return Ok(id.to_string());
  }
  if let Some(id) = id.as_u64() {
    return Ok(id.to_string());
  }
  Err(Error::Validation(format!("cannot use {id} as a resource id")))
}

/// Pull the designated scalar out of a dereferenced object
fn extract_scalar(resolved: &Value, field: &str) -> Result<Value> {
  resolved
    .get(field)
    .cloned()
    .ok_or_else(|| Error::Validation(format!("resolved reference has no {field} field: {resolved}")))
}

/// Read the test case key and version out of an execution's `testCase` link.
///
/// The link has the form `.../testcases/{key}/versions/{version}`.
pub fn extract_test_case_from_test_execution(test_execution: &Value) -> Result<(String, String)> {
  let url = test_execution
    .get("testCase")
    .and_then(|test_case| test_case.get("self"))
    .and_then(Value::as_str)
    .ok_or_else(|| Error::Validation("test execution has no testCase.self link".to_string()))?;

  let segments: Vec<&str> = url.trim_end_matches('/').split('/').collect();
  match segments[..] {
    [.., key, "versions", version] => Ok((key.to_string(), version.to_string())),
    _ => Err(Error::Validation(format!("unexpected testCase self link: {url}"))),
  }
}

impl ZephyrClient {
  /// Follow a reference object's `self` link and merge the result into it.
  ///
  /// `Null` references are legitimately absent (e.g. a cycle with no owner)
  /// and pass through as `Null` without a request. The `self` link must live
  /// under this client's own base URL; anything else is a validation error.
  /// On key conflicts the original reference wins.
  pub async fn dereference(&self, reference: &Value) -> Result<Value> {
    if reference.is_null() {
      return Ok(Value::Null);
    }

    let self_url = reference
      .get("self")
      .and_then(Value::as_str)
      .ok_or_else(|| Error::Validation(format!("reference has no self link: {reference}")))?;
    let endpoint = self_url
      .strip_prefix(&self.base_url)
      .map(|rest| rest.trim_start_matches('/').to_string())
      .ok_or_else(|| {
        Error::Validation(format!("self link {self_url} is not under base URL {}", self.base_url))
      })?;

    let fetched = self.get(&endpoint, &[]).await?;
    Ok(merge(reference, fetched))
  }

  /// Fetch the resource a bare id points to, using the kind's endpoint
  /// template. Used for fields the API transmits without a `self` link.
  pub async fn resolve_reference(&self, kind: RefKind, id: &Value) -> Result<Value> {
    let id = format_id(id)?;
    self.get(&kind.endpoint(&id), &[]).await
  }

  /// Resolve a user reference into the Jira user it names.
  ///
  /// Accepts either a bare account-id string or an embedded object with an
  /// `accountId` field; both normalize through [`AccountRef`] and produce the
  /// same result: the original fields merged with the fetched user, which
  /// carries `displayName`. `Null` passes through without a request. Fails
  /// with [`Error::Config`] when no Jira client is attached.
  pub async fn get_user_name(&self, user: &Value) -> Result<Value> {
    let Some(account) = AccountRef::from_value(user)? else {
      return Ok(Value::Null);
    };
    let jira = self
      .jira
      .as_ref()
      .ok_or_else(|| Error::Config("Jira credentials are not configured; cannot resolve user references".to_string()))?;

    let fetched = jira.get_user(account.account_id()).await?;
    let original = match user {
      Value::Object(_) => user.clone(),
      _ => json!({ "accountId": account.account_id() }),
    };
    Ok(merge(&original, fetched))
  }

  /// Walk an entity payload and resolve its reference fields per the mode.
  ///
  /// Fields that are absent or `null` are skipped in every mode.
  pub(crate) async fn enrich(&self, payload: Value, kind: EntityKind, mode: ParseMode) -> Result<Value> {
    if mode == ParseMode::Raw {
      return Ok(payload);
    }
    let mut fields = match payload {
      Value::Object(fields) => fields,
      other => return Ok(other),
    };

    for (name, ref_kind) in kind.reference_fields() {
      let current = match fields.get(*name) {
        Some(value) if !value.is_null() => value.clone(),
        _ => continue,
      };
      debug!("resolving {} field ({:?})", name, ref_kind);
      let resolved = self.resolve_field(&current, *ref_kind, mode).await?;
      fields.insert((*name).to_string(), resolved);
    }

    for name in kind.user_fields() {
      let current = match fields.get(*name) {
        Some(value) if !value.is_null() => value.clone(),
        _ => continue,
      };
      debug!("resolving {} user field", name);
      let user = self.get_user_name(&current).await?;
      let resolved = match mode {
        ParseMode::Simple => extract_scalar(&user, "displayName")?,
        _ => user,
      };
      fields.insert((*name).to_string(), resolved);
    }

    Ok(Value::Object(fields))
  }

  /// Resolve one reference field: dereference the `self` link when there is
  /// one, otherwise synthesize the endpoint from the kind and the bare id.
  async fn resolve_field(&self, value: &Value, kind: RefKind, mode: ParseMode) -> Result<Value> {
    let resolved = if value.get("self").is_some() {
      self.dereference(value).await?
    } else {
      let id = value.get("id").unwrap_or(value);
      let fetched = self.resolve_reference(kind, id).await?;
      merge(value, fetched)
    };

    match mode {
      ParseMode::Simple => extract_scalar(&resolved, kind.scalar_field()),
      _ => Ok(resolved),
    }
  }
}
