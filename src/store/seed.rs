//! Seed file loading
//!
//! The seed is a JSON array of movie objects with `id`, `Movie`, `Genre`,
//! `Year` and an optional `Language`. Seed records are trusted: they define
//! the genre set and are not run through the validator.

use std::fs;
use std::path::Path;

use crate::schema::Movie;

use super::errors::{StoreError, StoreResult};

/// Reads and parses the seed file at `path`.
pub fn load_seed(path: &Path) -> StoreResult<Vec<Movie>> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_seed(&content).map_err(|source| StoreError::SeedParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses seed JSON.
pub fn parse_seed(content: &str) -> Result<Vec<Movie>, serde_json::Error> {
    serde_json::from_str(content)
}
