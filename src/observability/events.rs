//! Observable events for moviedb
//!
//! Every structured log line carries one of these as its `event` field, so
//! log consumers can match on a stable name instead of free text.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration resolved
    ConfigLoaded,
    /// Seed file loaded into the store
    SeedLoaded,
    /// Listener bound, ready to serve
    ServerListening,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,
    /// Startup failed (process exits)
    BootFailed,

    // Request handling
    /// A movie was created
    MovieCreated,
    /// A movie was replaced
    MovieUpdated,
    /// A movie was deleted
    MovieDeleted,
    /// A write was rejected by the validator
    ValidationRejected,
}

impl Event {
    /// Returns the event name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SeedLoaded => "SEED_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::BootFailed => "BOOT_FAILED",
            Event::MovieCreated => "MOVIE_CREATED",
            Event::MovieUpdated => "MOVIE_UPDATED",
            Event::MovieDeleted => "MOVIE_DELETED",
            Event::ValidationRejected => "VALIDATION_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
