//! Validation error type

use std::collections::BTreeMap;

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A rejected movie body, with one message per violated field.
///
/// Fields are kept in name order so the rendered error is deterministic.
/// `$root` is used when the body is not a JSON object at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid movie: {}", describe(.fields))]
pub struct ValidationError {
    fields: BTreeMap<String, String>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.push(field, message);
        err
    }

    /// Records a violation. The first message for a field wins.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Per-field messages, ordered by field name.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Returns the message recorded for `field`.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Converts an accumulated error into a result.
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

fn describe(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_fields_in_order() {
        let mut err = ValidationError::new();
        err.push("Year", "Must be an integer.");
        err.push("Genre", "This field is required.");

        assert_eq!(
            err.to_string(),
            "invalid movie: Genre: This field is required.; Year: Must be an integer."
        );
    }

    #[test]
    fn test_first_message_wins() {
        let mut err = ValidationError::field("Movie", "Must not be blank.");
        err.push("Movie", "Must be a string.");
        assert_eq!(err.message("Movie"), Some("Must not be blank."));
    }

    #[test]
    fn test_empty_error_is_ok() {
        assert!(ValidationError::new().into_result().is_ok());
        assert!(ValidationError::field("id", "Must be an integer.")
            .into_result()
            .is_err());
    }
}
