//! # Zephyr Scale API Client
//!
//! Provides a client for the Zephyr Scale Cloud test-management API with
//! Jira-backed reference resolution. Test cases, test cycles, and test
//! executions are retrieved as schema-flexible JSON payloads whose reference
//! fields (statuses, priorities, projects, environments, linked entities,
//! and user accounts) can be resolved at three fidelity levels: `raw`,
//! `full` (merge, originals preserved), and `simple` (scalar substitution).

pub mod auth;
mod client;
pub mod consts;
mod endpoints;
pub mod error;
mod jira;
pub mod models;
mod resolve;

// Re-export the clients
pub use client::ZephyrClient;
pub use error::{Error, Result};
pub use jira::{JiraAuth, JiraClient};
// Re-export models
pub use models::{AccountRef, EntityKind, Page, ParseMode, RefKind, StatusType};
pub use resolve::extract_test_case_from_test_execution;
