//! # List Commands
//!
//! Subcommands that fetch a single page of a collection and print the
//! envelope as JSON.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use zapi_client::auth::create_zephyr_client_from_env;

use super::{ParseModeArg, StatusTypeArg};
use crate::output::print_json;

/// Command for listing collections
#[derive(Args)]
pub struct ListArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: ListSubcommands,
}

/// Subcommands for the list command
#[derive(Subcommand)]
pub enum ListSubcommands {
  /// List test executions from a test case or from a test cycle
  TestExecutions {
    /// Key of a test case or test cycle (e.g. BLOCK-T21 or BLOCK-R21)
    key: String,

    /// The maximum number of test executions to return
    #[arg(short = 'm', long = "max", default_value_t = 20)]
    max_results: u64,

    /// List only the last test execution for each test case
    #[arg(short = 'o', long)]
    only_last: bool,

    /// Output fidelity for reference fields
    #[arg(short = 'p', long, value_enum, default_value_t = ParseModeArg::Raw)]
    parse: ParseModeArg,

    /// Indent width of the JSON output
    #[arg(short = 'i', long, default_value_t = 4)]
    indent: usize,
  },

  /// List test cycles
  TestCycles {
    /// Restrict the listing to one Jira project
    #[arg(long)]
    project_key: Option<String>,

    /// Index of the first cycle to return; must be a multiple of the page size
    #[arg(long, default_value_t = 0)]
    start_at: u64,

    /// The maximum number of test cycles to return
    #[arg(short = 'm', long = "max", default_value_t = 20)]
    max_results: u64,

    /// Indent width of the JSON output
    #[arg(short = 'i', long, default_value_t = 4)]
    indent: usize,
  },

  /// List the available statuses
  Statuses {
    /// Restrict the listing to one status scope
    #[arg(long, value_enum)]
    status_type: Option<StatusTypeArg>,

    /// The maximum number of statuses to return
    #[arg(short = 'm', long = "max", default_value_t = 20)]
    max_results: u64,

    /// Indent width of the JSON output
    #[arg(short = 'i', long, default_value_t = 4)]
    indent: usize,
  },
}

/// Handle the list command
pub async fn handle(args: ListArgs) -> Result<()> {
  let zapi = create_zephyr_client_from_env().context("Failed to configure API clients")?;

  match args.subcommand {
    ListSubcommands::TestExecutions {
      key,
      max_results,
      only_last,
      parse,
      indent,
    } => {
      let page = zapi.list_test_executions(&key, max_results, only_last, parse.into()).await?;
      print_json(&serde_json::to_value(page)?, indent)
    }
    ListSubcommands::TestCycles {
      project_key,
      start_at,
      max_results,
      indent,
    } => {
      let page = zapi.list_test_cycles(project_key.as_deref(), start_at, max_results).await?;
      print_json(&serde_json::to_value(page)?, indent)
    }
    ListSubcommands::Statuses {
      status_type,
      max_results,
      indent,
    } => {
      let page = zapi.get_statuses(status_type.map(Into::into), max_results).await?;
      print_json(&serde_json::to_value(page)?, indent)
    }
  }
}
