//! Field definitions and form rendering.

use std::sync::LazyLock;

use ironhtml::html;
use ironhtml_elements::Div;

use crate::error::ErrorMap;
use crate::fields::{char_field, choice_field, email_field, number_field, Field, GUEST_CHOICES};
use crate::state::FieldValues;
use crate::validation::Validator;
use crate::widgets::{Widget, WidgetAttrs};

static REGISTRATION_FIELDS: LazyLock<Vec<FormFieldDef>> = LazyLock::new(|| {
    FormBuilder::new()
        .field(char_field(Field::Name, true))
        .field(email_field(Field::Email))
        .field(number_field(Field::Age))
        .field(choice_field(Field::AttendingWithGuest, &GUEST_CHOICES))
        .field(char_field(Field::GuestName, false))
        .build()
});

/// The registration form's field definitions, in form order.
#[must_use]
pub fn registration_fields() -> &'static [FormFieldDef] {
    &REGISTRATION_FIELDS
}

/// Definition of a form field.
pub struct FormFieldDef {
    /// The field this definition renders and validates.
    pub field: Field,
    /// Field label.
    pub label: String,
    /// Whether the field is required.
    pub required: bool,
    /// The widget to render.
    pub widget: Box<dyn Widget>,
    /// Validators, run in order until the first failure.
    pub validators: Vec<Box<dyn Validator>>,
    /// Render the label on the same line as the widget.
    pub inline_label: bool,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("inline_label", &self.inline_label)
            .finish_non_exhaustive()
    }
}

impl FormFieldDef {
    /// Creates a new field definition labelled after `field`.
    pub fn new(field: Field, widget: impl Widget + 'static) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            required: false,
            widget: Box::new(widget),
            validators: Vec::new(),
            inline_label: false,
        }
    }

    /// Makes the field required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Renders the label on the same line as the widget.
    #[must_use]
    pub const fn label_inline(mut self) -> Self {
        self.inline_label = true;
        self
    }
}

/// Renders a form field with Bootstrap 5 styling.
#[must_use]
pub fn render_bootstrap_field(field: &FormFieldDef, value: &str, error: Option<&str>) -> String {
    let name = field.field.as_str();
    let id = format!("id_{name}");

    let required_marker = if field.required { " *" } else { "" };
    let label_text = format!("{}{}", field.label, required_marker);

    let mut attrs = WidgetAttrs::new();
    attrs.set("id", &id);

    if error.is_some() {
        attrs.set("class", "is-invalid");
    }

    let widget_html = field.widget.render(name, Some(value), &attrs);

    let label_class = if field.inline_label {
        "form-label me-2"
    } else {
        "form-label"
    };
    let label_el = html! {
        label.for_(#id).class(#label_class) { #label_text }
    };

    let wrapper = html! { div.class("mb-3 form-field") }
        .raw(label_el.render())
        .raw(&widget_html);

    wrapper
        .when(error.is_some(), |d| {
            d.child::<Div, _>(|e| {
                e.class("invalid-feedback error_msg")
                    .text(error.unwrap_or(""))
            })
        })
        .render()
}

/// Renders the registration form with Bootstrap 5 styling.
///
/// The guest name input is only rendered while attending with a guest.
#[must_use]
pub fn render_registration_form(values: &FieldValues, errors: &ErrorMap, action: &str) -> String {
    let title = html! {
        h2.class("head") { "Event Registration Form" }
    };

    let mut form = html! {
        form.action(#action).method("post").class("form-section")
    };

    for def in registration_fields() {
        if def.field == Field::GuestName && !values.guest_field_visible() {
            continue;
        }
        let field_html = render_bootstrap_field(def, values.get(def.field), errors.get(def.field));
        form = form.child::<Div, _>(|d| d.raw(&field_html));
    }

    form = form.child::<Div, _>(|d| {
        let btn = html! {
            button.type_("submit").class("btn btn-primary submit-btn") {
                "Submit"
            }
        };
        d.class("form-field").raw(btn.render())
    });

    html! { div.class("container eventContainer") }
        .raw(title.render())
        .raw(form.render())
        .render()
}

/// A simple form builder for assembling field definitions.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FormFieldDef>,
}

impl FormBuilder {
    /// Creates a new form builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field definitions.
    #[must_use]
    pub fn build(self) -> Vec<FormFieldDef> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::BootstrapTextInput;

    #[test]
    fn test_registration_fields_in_form_order() {
        let fields: Vec<Field> = registration_fields().iter().map(|d| d.field).collect();
        assert_eq!(fields, Field::ALL);
    }

    #[test]
    fn test_render_field_no_errors() {
        let def = FormFieldDef::new(Field::Email, BootstrapTextInput::email()).required();
        let html = render_bootstrap_field(&def, "test@example.com", None);
        assert!(html.contains("form-label"));
        assert!(html.contains("Email *"));
        assert!(html.contains("test@example.com"));
        assert!(!html.contains("is-invalid"));
    }

    #[test]
    fn test_render_field_with_error() {
        let def = FormFieldDef::new(Field::Email, BootstrapTextInput::email());
        let html = render_bootstrap_field(&def, "bad", Some("Email is invalid"));
        assert!(html.contains("is-invalid"));
        assert!(html.contains("Email is invalid"));
    }

    #[test]
    fn test_render_form_hides_guest_name() {
        let html = render_registration_form(&FieldValues::default(), &ErrorMap::new(), "/register");
        assert!(html.contains("Event Registration Form"));
        assert!(html.contains(r#"name="attendingWithGuest""#));
        assert!(!html.contains(r#"name="guestName""#));
    }

    #[test]
    fn test_render_form_leaves_age_range_to_validation() {
        let html = render_registration_form(&FieldValues::default(), &ErrorMap::new(), "/register");
        assert!(html.contains(r#"type="number""#));
        assert!(!html.contains("min="));
        assert!(!html.contains("required="));
    }

    #[test]
    fn test_render_form_shows_guest_name() {
        let mut values = FieldValues::default();
        values.set(Field::AttendingWithGuest, "yes").unwrap();
        let html = render_registration_form(&values, &ErrorMap::new(), "/register");
        assert!(html.contains(r#"name="guestName""#));
        assert!(html.contains(r#"value="yes" selected"#));
    }

    #[test]
    fn test_form_builder() {
        let fields = FormBuilder::new()
            .field(FormFieldDef::new(Field::Name, BootstrapTextInput::new()).required())
            .field(FormFieldDef::new(Field::Email, BootstrapTextInput::email()))
            .build();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].label, "Name");
        assert_eq!(fields[1].field, Field::Email);
    }
}
