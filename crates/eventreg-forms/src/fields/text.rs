//! Text field types.

use crate::fields::Field;
use crate::form::FormFieldDef;
use crate::validation::{EmailValidator, PositiveNumberValidator, RequiredValidator};
use crate::widgets::BootstrapTextInput;

fn required_message(field: Field) -> String {
    format!("{} is required", field.label())
}

/// Creates a character field (text input).
pub fn char_field(field: Field, required: bool) -> FormFieldDef {
    let mut def = FormFieldDef::new(field, BootstrapTextInput::new());

    if required {
        def = def
            .required()
            .validator(RequiredValidator::with_message(required_message(field)));
    }

    def
}

/// Creates an email field. The required check runs before the format check.
pub fn email_field(field: Field) -> FormFieldDef {
    FormFieldDef::new(field, BootstrapTextInput::email())
        .required()
        .validator(RequiredValidator::with_message(required_message(field)))
        .validator(EmailValidator::with_message(format!(
            "{} is invalid",
            field.label()
        )))
}

/// Creates a number field that must hold a value greater than zero.
pub fn number_field(field: Field) -> FormFieldDef {
    let label = field.label();
    FormFieldDef::new(field, BootstrapTextInput::number())
        .required()
        .validator(RequiredValidator::with_message(required_message(field)))
        .validator(PositiveNumberValidator::with_messages(
            format!("{label} must be greater than 0"),
            format!("{label} must be a number"),
        ))
}
