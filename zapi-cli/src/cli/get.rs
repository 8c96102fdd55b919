//! # Get Commands
//!
//! Subcommands that fetch a single entity by key and print it as JSON.

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use serde_json::Value;
use zapi_client::EntityKind;
use zapi_client::auth::create_zephyr_client_from_env;

use super::ParseModeArg;
use crate::output::print_json;

/// Command for fetching single entities
#[derive(Args)]
pub struct GetArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: GetSubcommands,
}

/// Subcommands for the get command
#[derive(Subcommand)]
pub enum GetSubcommands {
  /// Get a test case by key (e.g. BLOCK-T21)
  TestCase {
    /// The test case key
    key: String,

    /// Output fidelity for reference fields
    #[arg(short = 'p', long, value_enum, default_value_t = ParseModeArg::Raw)]
    parse: ParseModeArg,

    /// Indent width of the JSON output
    #[arg(short = 'i', long, default_value_t = 4)]
    indent: usize,
  },

  /// Get a test cycle by key (e.g. BLOCK-R21)
  TestCycle {
    /// The test cycle key
    key: String,

    /// Output fidelity for reference fields
    #[arg(short = 'p', long, value_enum, default_value_t = ParseModeArg::Raw)]
    parse: ParseModeArg,

    /// Indent width of the JSON output
    #[arg(short = 'i', long, default_value_t = 4)]
    indent: usize,
  },

  /// Get a test execution by key (e.g. BLOCK-E192)
  TestExecution {
    /// The test execution key
    key: String,

    /// Output fidelity for reference fields
    #[arg(short = 'p', long, value_enum, default_value_t = ParseModeArg::Raw)]
    parse: ParseModeArg,

    /// Indent width of the JSON output
    #[arg(short = 'i', long, default_value_t = 4)]
    indent: usize,
  },

  /// Get the steps of a test case (PROJ-T…) or test execution (PROJ-E…)
  Steps {
    /// The test case or test execution key
    key: String,

    /// Indent width of the JSON output
    #[arg(short = 'i', long, default_value_t = 4)]
    indent: usize,
  },

  /// Look up a Jira user by account id
  User {
    /// The opaque Jira account id
    account_id: String,

    /// Indent width of the JSON output
    #[arg(short = 'i', long, default_value_t = 4)]
    indent: usize,
  },
}

/// Handle the get command
pub async fn handle(args: GetArgs) -> Result<()> {
  let zapi = create_zephyr_client_from_env().context("Failed to configure API clients")?;

  match args.subcommand {
    GetSubcommands::TestCase { key, parse, indent } => {
      let test_case = zapi.get_test_case(&key, parse.into()).await?;
      print_json(&test_case, indent)
    }
    GetSubcommands::TestCycle { key, parse, indent } => {
      let test_cycle = zapi.get_test_cycle(&key, parse.into()).await?;
      print_json(&test_cycle, indent)
    }
    GetSubcommands::TestExecution { key, parse, indent } => {
      let test_execution = zapi.get_test_execution(&key, parse.into()).await?;
      print_json(&test_execution, indent)
    }
    GetSubcommands::Steps { key, indent } => {
      let steps = match EntityKind::from_key(&key)? {
        EntityKind::TestCase => zapi.get_steps_in_test_case(&key).await?,
        EntityKind::TestExecution => zapi.get_steps_in_test_execution(&key).await?,
        EntityKind::TestCycle => {
          bail!("{key} names a test cycle; steps exist on test cases and test executions")
        }
      };
      print_json(&serde_json::to_value(steps)?, indent)
    }
    GetSubcommands::User { account_id, indent } => {
      let user = zapi.get_user_name(&Value::String(account_id)).await?;
      print_json(&user, indent)
    }
  }
}
