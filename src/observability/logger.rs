//! Tracing subscriber setup
//!
//! Logs go to stderr through the `tracing-subscriber` fmt layer, which
//! keeps stdout free for command output. The filter comes from `RUST_LOG`
//! and falls back to [`DEFAULT_FILTER`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "moviedb=info,tower_http=info";

/// Builds the log filter from `RUST_LOG`, or from `DEFAULT_FILTER`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// Returns false if a subscriber was already installed, which happens when
/// tests or an embedding binary set one up first.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}
