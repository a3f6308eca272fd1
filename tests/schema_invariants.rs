//! Schema Invariant Tests
//!
//! Tests for movie validation:
//! - Validation is deterministic
//! - Required fields must be present and non-null
//! - Types are matched exactly
//! - Bounds are inclusive

use moviedb::schema::{GenreSet, MovieValidator, LANGUAGE_MAX_LEN, NAME_MAX_LEN};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn genres() -> GenreSet {
    ["Animation", "Crime", "Drama"].into_iter().collect()
}

// =============================================================================
// Determinism
// =============================================================================

/// Same body validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);
    let body = json!({"Movie": 1, "Genre": "Horror", "Year": "1980"});

    let first = validator.validate(&body).unwrap_err();
    for _ in 0..100 {
        assert_eq!(validator.validate(&body).unwrap_err(), first);
    }
}

// =============================================================================
// Required Fields
// =============================================================================

#[test]
fn test_empty_object_reports_all_required_fields() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);

    let err = validator.validate(&json!({})).unwrap_err();
    let fields: Vec<_> = err.fields().keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["Genre", "Movie", "Year"]);
}

#[test]
fn test_null_is_rejected_for_every_schema_field() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);

    let err = validator
        .validate(&json!({"Movie": null, "Genre": null, "Year": null, "Language": null}))
        .unwrap_err();

    for field in ["Movie", "Genre", "Year", "Language"] {
        assert_eq!(err.message(field), Some("May not be null."), "field {}", field);
    }
}

// =============================================================================
// Types
// =============================================================================

#[test]
fn test_no_coercion_from_strings() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);

    let err = validator
        .validate(&json!({"Movie": "Heat", "Genre": "Crime", "Year": "1995"}))
        .unwrap_err();
    assert_eq!(err.message("Year"), Some("Must be an integer."));
}

#[test]
fn test_fractional_year_is_not_an_integer() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);

    let err = validator
        .validate(&json!({"Movie": "Heat", "Genre": "Crime", "Year": 1995.5}))
        .unwrap_err();
    assert_eq!(err.message("Year"), Some("Must be an integer."));
}

#[test]
fn test_integral_float_year_is_accepted() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);

    let draft = validator
        .validate(&json!({"id": 3.0, "Movie": "Heat", "Genre": "Crime", "Year": 1995.0}))
        .unwrap();
    assert_eq!(draft.year, 1995);
}

#[test]
fn test_non_numeric_year_is_not_an_integer() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);

    for year in [json!(true), json!([1995]), json!({"value": 1995})] {
        let err = validator
            .validate(&json!({"Movie": "Heat", "Genre": "Crime", "Year": year}))
            .unwrap_err();
        assert_eq!(err.message("Year"), Some("Must be an integer."), "year {}", year);
    }
}

#[test]
fn test_empty_name_is_rejected() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);

    let err = validator
        .validate(&json!({"Movie": "", "Genre": "Crime", "Year": 1995}))
        .unwrap_err();
    assert_eq!(err.message("Movie"), Some("Must not be blank."));
}

#[test]
fn test_whitespace_name_is_kept_verbatim() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);

    let draft = validator
        .validate(&json!({"Movie": "   ", "Genre": "Crime", "Year": 1995}))
        .unwrap();
    assert_eq!(draft.name, "   ");
}

#[test]
fn test_extra_fields_are_ignored() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);

    let draft = validator
        .validate(&json!({"Movie": "Heat", "Genre": "Crime", "Year": 1995, "Director": "Mann"}))
        .unwrap();
    assert_eq!(draft.name, "Heat");
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn test_string_limits_are_inclusive() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);

    let draft = validator
        .validate(&json!({
            "Movie": "m".repeat(NAME_MAX_LEN),
            "Genre": "Drama",
            "Year": 2000,
            "Language": "l".repeat(LANGUAGE_MAX_LEN),
        }))
        .unwrap();
    assert_eq!(draft.language.len(), LANGUAGE_MAX_LEN);

    let err = validator
        .validate(&json!({
            "Movie": "Heat",
            "Genre": "Drama",
            "Year": 2000,
            "Language": "l".repeat(LANGUAGE_MAX_LEN + 1),
        }))
        .unwrap_err();
    assert_eq!(
        err.message("Language"),
        Some("Must have no more than 50 characters.")
    );
}

#[test]
fn test_explicit_empty_language_is_allowed() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);

    let draft = validator
        .validate(&json!({"Movie": "Heat", "Genre": "Crime", "Year": 1995, "Language": ""}))
        .unwrap();
    assert_eq!(draft.language, "");
}

#[test]
fn test_genre_match_is_case_sensitive() {
    let genres = genres();
    let validator = MovieValidator::new(&genres);

    let err = validator
        .validate(&json!({"Movie": "Heat", "Genre": "crime", "Year": 1995}))
        .unwrap_err();
    assert_eq!(
        err.message("Genre"),
        Some("Must be one of: Animation, Crime, Drama.")
    );
}
