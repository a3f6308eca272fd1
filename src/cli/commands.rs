//! CLI command implementations
//!
//! Boot sequence for `start`:
//! 1. Resolve configuration (file, then flag overrides)
//! 2. Load the seed file into a store (fatal on failure)
//! 3. Build the router and serve until a shutdown signal

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info};

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::Event;
use crate::schema::MovieId;
use crate::store::{load_seed, MovieStore};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Seed summary printed by `check`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SeedSummary {
    pub movies: usize,
    pub genres: Vec<String>,
    pub next_id: MovieId,
}

impl SeedSummary {
    pub fn of(store: &MovieStore) -> CliResult<Self> {
        Ok(Self {
            movies: store.len(),
            genres: store.genres().iter().map(str::to_string).collect(),
            next_id: store.next_id()?,
        })
    }
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Start {
            config,
            host,
            port,
            data,
        } => {
            let config = resolve_config(config.as_deref(), host, port, data)?;
            start(config)
        }
        Command::Check { config, data } => {
            let config = resolve_config(config.as_deref(), None, None, data)?;
            check(&config)
        }
    }
}

/// Load the config file if given, then apply flag overrides
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    data: Option<PathBuf>,
) -> CliResult<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data) = data {
        config.data_file = data;
    }

    config.validate()?;

    info!(
        event = %Event::ConfigLoaded,
        address = %config.socket_addr(),
        data_file = %config.data_file.display(),
        "configuration resolved"
    );
    Ok(config)
}

/// Read the seed file into a store
pub fn load_store(path: &Path) -> CliResult<MovieStore> {
    let store = load_seed(path)
        .and_then(MovieStore::from_seed)
        .map_err(|e| {
            error!(event = %Event::BootFailed, error = %e, "seed load failed");
            CliError::from(e)
        })?;

    info!(
        event = %Event::SeedLoaded,
        movies = store.len(),
        genres = store.genres().len(),
        "seed loaded"
    );
    Ok(store)
}

/// Boot and serve until shutdown
pub fn start(config: ServerConfig) -> CliResult<()> {
    info!(event = %Event::BootStart, version = env!("CARGO_PKG_VERSION"), "starting moviedb");

    let store = load_store(&config.data_file)?;
    let server = HttpServer::with_config(config, store);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::serve_error(e.to_string()))
}

/// Load the seed and print a summary
pub fn check(config: &ServerConfig) -> CliResult<()> {
    let store = load_store(&config.data_file)?;
    let summary = SeedSummary::of(&store)?;
    write_json(&summary)
}

fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
