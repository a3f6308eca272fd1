//! Observability for moviedb
//!
//! - Structured logging via `tracing`
//! - Typed lifecycle and request events
//!
//! # Usage
//!
//! ```ignore
//! use moviedb::observability::{init_tracing, Event};
//!
//! init_tracing();
//! tracing::info!(event = %Event::SeedLoaded, movies = 12, "seed loaded");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{env_filter, init_tracing, DEFAULT_FILTER};
