//! Select field types.

use crate::fields::Field;
use crate::form::FormFieldDef;
use crate::widgets::BootstrapSelect;

/// Creates a choice field (select/dropdown).
pub fn choice_field(field: Field, choices: &[(&str, &str)]) -> FormFieldDef {
    let widget = BootstrapSelect::new(choices.to_vec());

    FormFieldDef::new(field, widget).label_inline()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::GUEST_CHOICES;

    #[test]
    fn test_choice_field() {
        let def = choice_field(Field::AttendingWithGuest, &GUEST_CHOICES);
        assert_eq!(def.field, Field::AttendingWithGuest);
        assert!(!def.required);
        assert!(def.validators.is_empty());
        assert_eq!(def.widget.input_type(), "select");
    }
}
