//! CLI module for moviedb
//!
//! Provides command-line interface for:
//! - start: Load the seed file and serve the API
//! - check: Validate the seed file and print a summary

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, load_store, resolve_config, run_command, start, SeedSummary};
pub use errors::{CliError, CliErrorCode, CliResult};

use crate::observability::init_tracing;

/// Parse arguments, install logging and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing();
    run_command(cli.command)
}
