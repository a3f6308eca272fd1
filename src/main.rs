//! moviedb CLI entry point
//!
//! Argument parsing, configuration, seeding and serving all live in the
//! `cli` module. This binary only reports a failure and sets the exit code.

use moviedb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
