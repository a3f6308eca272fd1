//! Store error types
//!
//! Seed errors are fatal: the process cannot start without its data.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::schema::MovieId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Seed file could not be read
    #[error("failed to read seed file '{}': {source}", .path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Seed file is not a JSON array of movies
    #[error("invalid seed data in '{}': {source}", .path.display())]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two seed records share an id
    #[error("duplicate movie id {0} in seed data")]
    DuplicateId(MovieId),

    /// No further ids can be assigned
    #[error("movie id space exhausted")]
    IdSpaceExhausted,
}
