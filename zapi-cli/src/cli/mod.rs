//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the zapi tool: the
//! `get` family for single entities and the `list` family for collections.

mod get;
mod list;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use zapi_client::{ParseMode, StatusType};

/// Top-level CLI command for the zapi tool
#[derive(Parser)]
#[command(name = "zapi")]
#[command(about = "Query the Zephyr Scale test-management API")]
#[command(
  long_about = "Query the Zephyr Scale test-management API.\n\n\
        Retrieves test cases, test cycles, test executions, and their step lists,\n\
        optionally resolving embedded references (statuses, priorities, projects,\n\
        environments, users) into human-readable form."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the zapi tool
#[derive(Subcommand)]
pub enum Commands {
  /// Get a single test case, test cycle, test execution, step list, or user
  Get(get::GetArgs),
  /// List test executions, test cycles, or statuses
  List(list::ListArgs),
}

/// Handle the parsed CLI command
pub async fn handle_cli(cli: Cli) -> Result<()> {
  match cli.command {
    Commands::Get(args) => get::handle(args).await,
    Commands::List(args) => list::handle(args).await,
  }
}

/// Output fidelity selector shared by the entity subcommands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ParseModeArg {
  /// Return the payload exactly as received
  #[default]
  Raw,
  /// Merge resolved reference data alongside the original fields
  Full,
  /// Replace each reference with its resolved scalar value
  Simple,
}

impl From<ParseModeArg> for ParseMode {
  fn from(arg: ParseModeArg) -> Self {
    match arg {
      ParseModeArg::Raw => Self::Raw,
      ParseModeArg::Full => Self::Full,
      ParseModeArg::Simple => Self::Simple,
    }
  }
}

/// Status scope filter for the statuses listing
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusTypeArg {
  /// Statuses applicable to test cases
  TestCase,
  /// Statuses applicable to test plans
  TestPlan,
  /// Statuses applicable to test cycles
  TestCycle,
  /// Statuses applicable to test executions
  TestExecution,
}

impl From<StatusTypeArg> for StatusType {
  fn from(arg: StatusTypeArg) -> Self {
    match arg {
      StatusTypeArg::TestCase => Self::TestCase,
      StatusTypeArg::TestPlan => Self::TestPlan,
      StatusTypeArg::TestCycle => Self::TestCycle,
      StatusTypeArg::TestExecution => Self::TestExecution,
    }
  }
}
