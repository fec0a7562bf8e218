//! Form field validators.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ErrorMap;
use crate::fields::Field;
use crate::form::registration_fields;
use crate::state::FieldValues;

/// Loose address shape: something, `@`, something, `.`, something.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that requires a non-empty value.
///
/// Only the empty string fails; a value made of spaces counts as input.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new `RequiredValidator` with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for email addresses.
///
/// The pattern is searched for anywhere in the value, so surrounding text
/// does not make an address invalid.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new `EmailValidator` with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if EMAIL_PATTERN.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for numbers strictly greater than zero.
///
/// Values are coerced with [`coerce_number`]. Values that do not coerce
/// are rejected with a separate message.
#[derive(Debug, Clone)]
pub struct PositiveNumberValidator {
    message: String,
    not_a_number: String,
}

impl PositiveNumberValidator {
    /// Creates a new `PositiveNumberValidator` with custom messages.
    pub fn with_messages(message: impl Into<String>, not_a_number: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            not_a_number: not_a_number.into(),
        }
    }
}

impl Validator for PositiveNumberValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let num = coerce_number(value).ok_or_else(|| self.not_a_number.clone())?;

        if num <= 0.0 {
            return Err(self.message.clone());
        }

        Ok(())
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Coerces a form string to a number the way browser number inputs do.
///
/// Surrounding whitespace (including U+FEFF) is ignored and a blank
/// string is zero. Accepts
/// decimal and exponent notation, `0x`/`0o`/`0b` integer literals and a
/// signed `Infinity`. Returns `None` for anything else.
#[must_use]
pub fn coerce_number(value: &str) -> Option<f64> {
    let trimmed = value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" && trimmed.len() - unsigned.len() <= 1 {
        return Some(if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return integer_literal(digits, radix);
        }
    }

    // Rust also accepts "inf" and "nan", which forms treat as text.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Folds radix digits into an `f64`. Signs and other characters are
/// rejected; overlong literals lose precision instead of failing.
fn integer_literal(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
    })
}

/// Validates all registration fields and returns the failing ones.
///
/// Each field's validators run in order and stop at the first failure.
/// The guest name is only checked while the guest branch is active.
#[must_use]
pub fn validate(values: &FieldValues) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for def in registration_fields() {
        let value = values.get(def.field);
        if let Some(message) = def
            .validators
            .iter()
            .find_map(|validator| validator.validate(value).err())
        {
            errors.add(def.field, message);
        }
    }

    if values.guest_field_visible() && values.get(Field::GuestName).is_empty() {
        errors.add(
            Field::GuestName,
            "Guest Name is required if attending with a guest",
        );
    }

    errors
}
