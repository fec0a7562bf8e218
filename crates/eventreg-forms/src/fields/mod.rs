//! Form field definitions.

mod select;
mod text;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

pub use select::choice_field;
pub use text::{char_field, email_field, number_field};

/// Choices offered by the `attendingWithGuest` select, as (value, label).
pub const GUEST_CHOICES: [(&str, &str); 2] = [("no", "No"), ("yes", "Yes")];

/// A field of the registration form.
///
/// Variants are declared in form order, which is also their sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Age,
    AttendingWithGuest,
    GuestName,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Age,
        Self::AttendingWithGuest,
        Self::GuestName,
    ];

    /// The field's input name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::AttendingWithGuest => "attendingWithGuest",
            Self::GuestName => "guestName",
        }
    }

    /// The label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Age => "Age",
            Self::AttendingWithGuest => "Are you attending with a guest?",
            Self::GuestName => "Guest Name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Returns whether `value` is one of the guest attendance choices.
#[must_use]
pub fn is_guest_choice(value: &str) -> bool {
    GUEST_CHOICES.iter().any(|(choice, _)| *choice == value)
}
