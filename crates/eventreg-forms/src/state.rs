//! Field values and the form state that owns them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ErrorMap, FormError, Result};
use crate::fields::{is_guest_choice, Field};
use crate::validation::validate;

/// Current contents of every registration input.
///
/// All values are kept as entered, including `age`. The
/// `attending_with_guest` value is always one of the guest choices, so
/// values are only built through [`FieldValues::set`] or deserialization,
/// both of which check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawFieldValues")]
pub struct FieldValues {
    name: String,
    email: String,
    age: String,
    attending_with_guest: String,
    guest_name: String,
}

/// Unchecked wire form of [`FieldValues`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFieldValues {
    name: String,
    email: String,
    age: String,
    attending_with_guest: String,
    guest_name: String,
}

impl TryFrom<RawFieldValues> for FieldValues {
    type Error = FormError;

    fn try_from(raw: RawFieldValues) -> Result<Self> {
        if !is_guest_choice(&raw.attending_with_guest) {
            return Err(FormError::InvalidChoice {
                field: Field::AttendingWithGuest,
                value: raw.attending_with_guest,
            });
        }
        Ok(Self {
            name: raw.name,
            email: raw.email,
            age: raw.age,
            attending_with_guest: raw.attending_with_guest,
            guest_name: raw.guest_name,
        })
    }
}

impl Default for FieldValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            age: String::new(),
            attending_with_guest: "no".to_string(),
            guest_name: String::new(),
        }
    }
}

impl FieldValues {
    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Age => &self.age,
            Field::AttendingWithGuest => &self.attending_with_guest,
            Field::GuestName => &self.guest_name,
        }
    }

    /// Sets the value of a field.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidChoice`] when `attendingWithGuest` is
    /// given a value outside the guest choices. The stored value is left
    /// unchanged in that case.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Age => &mut self.age,
            Field::AttendingWithGuest => {
                if !is_guest_choice(&value) {
                    return Err(FormError::InvalidChoice { field, value });
                }
                &mut self.attending_with_guest
            }
            Field::GuestName => &mut self.guest_name,
        };
        *slot = value;
        Ok(())
    }

    /// Whether the guest name input is shown.
    #[must_use]
    pub fn guest_field_visible(&self) -> bool {
        self.attending_with_guest == "yes"
    }

    /// Iterates over all fields and their values in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

/// Field values plus the errors from the last submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FieldValues,
    errors: ErrorMap,
}

impl FormState {
    /// Creates a form with default values and no errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form pre-filled with `values`.
    #[must_use]
    pub fn with_values(values: FieldValues) -> Self {
        Self {
            values,
            errors: ErrorMap::new(),
        }
    }

    /// Current field values.
    #[must_use]
    pub const fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Errors from the last submit attempt.
    #[must_use]
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Stores a new value for a field. No validation is performed.
    ///
    /// # Errors
    ///
    /// Fails only for a value outside the guest choices; see
    /// [`FieldValues::set`].
    pub fn update(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.values.set(field, value)?;
        debug!(field = %field, "field updated");
        Ok(())
    }

    /// Like [`FormState::update`], addressing the field by input name.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] for a name outside the form.
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.update(name.parse()?, value)
    }

    /// Validates the current values and replaces the stored errors.
    ///
    /// Returns `true` when no field failed.
    pub fn validate_and_submit(&mut self) -> bool {
        self.errors = validate(&self.values);
        debug!(errors = self.errors.len(), "form validated");
        self.errors.is_empty()
    }
}
