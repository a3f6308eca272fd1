//! Movie body validation
//!
//! Validation semantics:
//! - The body must be a JSON object
//! - Required fields must be present and non-null
//! - Strings are never coerced. Integer fields also take floats with no
//!   fractional part
//! - Undeclared fields are ignored
//! - `Language` is the only field with a default
//!
//! The validator never mutates the store and is deterministic.

use serde_json::{Map, Value};

use super::errors::{ValidationError, ValidationResult};
use super::types::{GenreSet, MovieDraft, LANGUAGE_MAX_LEN, NAME_MAX_LEN, YEAR_MAX, YEAR_MIN};

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "May not be null.";
const NOT_STRING: &str = "Must be a string.";
const NOT_INTEGER: &str = "Must be an integer.";
const BLANK: &str = "Must not be blank.";

/// Validates movie bodies against the fixed movie schema.
///
/// Borrowing the genre set ties validation to the enumeration the store was
/// seeded with.
pub struct MovieValidator<'a> {
    genres: &'a GenreSet,
}

impl<'a> MovieValidator<'a> {
    /// Creates a validator that accepts only the given genres.
    pub fn new(genres: &'a GenreSet) -> Self {
        Self { genres }
    }

    /// Validates a raw request body.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming every violated field. A non-object
    /// body is reported under `$root`.
    pub fn validate(&self, body: &Value) -> ValidationResult<MovieDraft> {
        let obj = body
            .as_object()
            .ok_or_else(|| ValidationError::field("$root", "Must be an object."))?;

        let mut errors = ValidationError::new();

        check_id(obj, &mut errors);
        let name = required_string(obj, "Movie", &mut errors)
            .and_then(|name| check_name(name, &mut errors));
        let genre = required_string(obj, "Genre", &mut errors)
            .and_then(|genre| self.check_genre(genre, &mut errors));
        let year = required_integer(obj, "Year", &mut errors)
            .and_then(|year| check_year(year, &mut errors));
        let language = optional_string(obj, "Language", &mut errors)
            .map(|language| check_language(language.unwrap_or(""), &mut errors));

        match (name, genre, year, language, errors.into_result()) {
            (Some(name), Some(genre), Some(year), Some(Some(language)), Ok(())) => Ok(MovieDraft {
                name,
                genre,
                year,
                language,
            }),
            (_, _, _, _, Err(errors)) => Err(errors),
            // Every `None` above records a field error, so this is unreachable
            // with an empty error set.
            _ => Err(ValidationError::field("$root", "Invalid movie.")),
        }
    }

    fn check_genre(&self, genre: &str, errors: &mut ValidationError) -> Option<String> {
        if self.genres.contains(genre) {
            return Some(genre.to_string());
        }

        let message = if self.genres.is_empty() {
            "No genres are available.".to_string()
        } else {
            format!(
                "Must be one of: {}.",
                self.genres.iter().collect::<Vec<_>>().join(", ")
            )
        };
        errors.push("Genre", message);
        None
    }
}

/// `id` is accepted as absent, null, or an integer, and otherwise ignored.
fn check_id(obj: &Map<String, Value>, errors: &mut ValidationError) {
    if let Some(value) = obj.get("id") {
        if !(value.is_null() || as_integer(value).is_some()) {
            errors.push("id", NOT_INTEGER);
        }
    }
}

fn check_name(name: &str, errors: &mut ValidationError) -> Option<String> {
    if name.is_empty() {
        errors.push("Movie", BLANK);
        return None;
    }
    check_length("Movie", name, NAME_MAX_LEN, errors)
}

fn check_language(language: &str, errors: &mut ValidationError) -> Option<String> {
    check_length("Language", language, LANGUAGE_MAX_LEN, errors)
}

fn check_length(
    field: &str,
    value: &str,
    max: usize,
    errors: &mut ValidationError,
) -> Option<String> {
    if value.chars().count() > max {
        errors.push(field, format!("Must have no more than {} characters.", max));
        return None;
    }
    Some(value.to_string())
}

fn check_year(year: i64, errors: &mut ValidationError) -> Option<i32> {
    if year < i64::from(YEAR_MIN) {
        errors.push("Year", format!("Must be greater than or equal to {}.", YEAR_MIN));
        return None;
    }
    if year > i64::from(YEAR_MAX) {
        errors.push("Year", format!("Must be less than or equal to {}.", YEAR_MAX));
        return None;
    }
    i32::try_from(year).ok()
}

fn required_string<'v>(
    obj: &'v Map<String, Value>,
    field: &str,
    errors: &mut ValidationError,
) -> Option<&'v str> {
    match obj.get(field) {
        None => {
            errors.push(field, REQUIRED);
            None
        }
        Some(Value::Null) => {
            errors.push(field, NOT_NULL);
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            errors.push(field, NOT_STRING);
            None
        }
    }
}

/// Returns `Some(None)` when the field is absent, `None` on a violation.
fn optional_string<'v>(
    obj: &'v Map<String, Value>,
    field: &str,
    errors: &mut ValidationError,
) -> Option<Option<&'v str>> {
    match obj.get(field) {
        None => Some(None),
        Some(Value::Null) => {
            errors.push(field, NOT_NULL);
            None
        }
        Some(Value::String(s)) => Some(Some(s.as_str())),
        Some(_) => {
            errors.push(field, NOT_STRING);
            None
        }
    }
}

fn required_integer(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationError,
) -> Option<i64> {
    match obj.get(field) {
        None => {
            errors.push(field, REQUIRED);
            None
        }
        Some(Value::Null) => {
            errors.push(field, NOT_NULL);
            None
        }
        Some(value) => match as_integer(value) {
            Some(n) => Some(n),
            None => {
                errors.push(field, NOT_INTEGER);
                None
            }
        },
    }
}

/// Integers and floats with no fractional part, as `i64`.
///
/// Values outside `i64` saturate so they fail the range check rather than
/// the type check.
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if value.is_u64() {
        return Some(i64::MAX);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 => Some(f as i64),
        _ => None,
    }
}
