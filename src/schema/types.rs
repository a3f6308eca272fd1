//! Movie record types
//!
//! Wire field names follow the seed file: `id`, `Movie`, `Genre`, `Year`,
//! `Language`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Primary key of a movie
pub type MovieId = i64;

/// Maximum length of `Movie`, in characters
pub const NAME_MAX_LEN: usize = 150;

/// Maximum length of `Language`, in characters
pub const LANGUAGE_MAX_LEN: usize = 50;

/// Earliest accepted `Year`
pub const YEAR_MIN: i32 = 1900;

/// Latest accepted `Year`
pub const YEAR_MAX: i32 = 2050;

/// A stored movie record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(rename = "Movie")]
    pub name: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Language", default)]
    pub language: String,
}

/// A validated movie body that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub name: String,
    pub genre: String,
    pub year: i32,
    pub language: String,
}

impl MovieDraft {
    /// Binds the draft to an id, producing a storable record.
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            name: self.name,
            genre: self.genre,
            year: self.year,
            language: self.language,
        }
    }
}

/// The closed set of genres accepted by the validator.
///
/// Built once from the seed data and never extended afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreSet(BTreeSet<String>);

impl GenreSet {
    /// Returns true if `genre` is a known genre (exact, case-sensitive match).
    pub fn contains(&self, genre: &str) -> bool {
        self.0.contains(genre)
    }

    /// Iterates genres in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for GenreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
