//! Movie schema and validator
//!
//! Every write goes through [`MovieValidator`] before it touches the store.
//!
//! # Rules
//!
//! - `Movie`: required, non-blank string, at most 150 characters
//! - `Genre`: required, one of the genres present in the seed data
//! - `Year`: required integer in 1900..=2050
//! - `Language`: optional string, at most 50 characters, defaults to `""`
//! - `id`: may be absent or null on input; it is always assigned by the store
//!
//! All violations are collected, so a rejected body reports every bad field
//! at once.

mod errors;
mod types;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use types::{
    GenreSet, Movie, MovieDraft, MovieId, LANGUAGE_MAX_LEN, NAME_MAX_LEN, YEAR_MAX, YEAR_MIN,
};
pub use validator::MovieValidator;
