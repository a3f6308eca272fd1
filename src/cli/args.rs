//! CLI argument definitions using clap
//!
//! Commands:
//! - moviedb start [--config <path>] [--host <host>] [--port <port>] [--data <path>]
//! - moviedb check [--config <path>] [--data <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// moviedb - an in-memory movie catalogue behind a JSON REST API
#[derive(Parser, Debug)]
#[command(name = "moviedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the seed file and serve the API
    Start {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Seed file (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Load the seed file, print a summary and exit
    Check {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed file (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
