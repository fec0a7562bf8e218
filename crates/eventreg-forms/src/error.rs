//! Error types for forms.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::fields::Field;

/// Form-specific errors.
///
/// These cover misuse of the form API. Failed validation is never an
/// `Err`; it is reported through [`ErrorMap`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The field name is not part of the registration form.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The value is not one of the field's choices.
    #[error("invalid choice for field {field}: {value}")]
    InvalidChoice { field: Field, value: String },

    /// A session command could not be parsed.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// Validation messages keyed by field.
///
/// Holds at most one message per field. A field with no entry passed
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: BTreeMap<Field, String>,
}

impl ErrorMap {
    /// Creates a new empty `ErrorMap`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records an error for a field. The first message recorded wins.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Returns whether there are any errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error for a specific field.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Iterates over failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl std::fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in &self.errors {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = ErrorMap::new();
        errors.add(Field::Email, "Email is required");
        errors.add(Field::Email, "Email is invalid");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn test_display_in_form_order() {
        let mut errors = ErrorMap::new();
        errors.add(Field::Age, "Age is required");
        errors.add(Field::Name, "Name is required");
        assert_eq!(
            errors.to_string(),
            "name: Name is required\nage: Age is required\n"
        );
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let mut errors = ErrorMap::new();
        errors.add(Field::GuestName, "missing");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"guestName":"missing"}"#);
    }
}
