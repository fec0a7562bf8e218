//! Bootstrap 5 form widgets.

use super::{html_escape, Widget, WidgetAttrs};

fn widget_id(name: &str, attrs: &WidgetAttrs) -> String {
    attrs
        .get("id")
        .cloned()
        .unwrap_or_else(|| format!("id_{name}"))
}

fn widget_class(base: &str, attrs: &WidgetAttrs) -> String {
    attrs
        .get("class")
        .map_or_else(|| base.to_string(), |extra| format!("{base} {extra}"))
}

/// Bootstrap 5 text input widget.
#[derive(Debug, Clone)]
pub struct BootstrapTextInput {
    /// The HTML input type (text, email, number).
    pub input_type: String,
}

impl Default for BootstrapTextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
        }
    }
}

impl BootstrapTextInput {
    /// Creates a new text input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an email input.
    #[must_use]
    pub fn email() -> Self {
        Self {
            input_type: "email".to_string(),
        }
    }

    /// Creates a number input.
    #[must_use]
    pub fn number() -> Self {
        Self {
            input_type: "number".to_string(),
        }
    }
}

impl Widget for BootstrapTextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();

        format!(
            r#"<input type="{}" class="{}" id="{}" name="{}"{}{}>"#,
            self.input_type,
            widget_class("form-control", attrs),
            widget_id(name, attrs),
            name,
            value_attr,
            attrs.extra_html()
        )
    }

    fn input_type(&self) -> &str {
        &self.input_type
    }
}

/// Bootstrap 5 select widget. Every option is a real choice; there is no
/// blank entry.
#[derive(Debug, Clone)]
pub struct BootstrapSelect {
    /// Available choices (value, label).
    pub choices: Vec<(String, String)>,
}

impl BootstrapSelect {
    /// Creates a new select with the given choices.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
        }
    }
}

impl Widget for BootstrapSelect {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let options: String = self
            .choices
            .iter()
            .map(|(opt_value, label)| {
                let selected = value.is_some_and(|v| v == opt_value);
                let selected_attr = if selected { " selected" } else { "" };
                format!(
                    r#"<option value="{}"{selected_attr}>{}</option>"#,
                    html_escape(opt_value),
                    html_escape(label)
                )
            })
            .collect();

        format!(
            r#"<select class="{}" id="{}" name="{}"{}>{}</select>"#,
            widget_class("form-select", attrs),
            widget_id(name, attrs),
            name,
            attrs.extra_html(),
            options
        )
    }

    fn input_type(&self) -> &str {
        "select"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_text_input() {
        let widget = BootstrapTextInput::new();
        let html = widget.render("name", Some("O'Hara"), &WidgetAttrs::new());
        assert!(html.contains(r#"class="form-control""#));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"id="id_name""#));
        assert!(html.contains(r#"value="O&#x27;Hara""#));
    }

    #[test]
    fn test_bootstrap_number_with_error_class() {
        let widget = BootstrapTextInput::number();
        let mut attrs = WidgetAttrs::new();
        attrs.set("class", "is-invalid");
        let html = widget.render("age", Some("0"), &attrs);
        assert!(html.contains(r#"type="number""#));
        assert!(html.contains(r#"class="form-control is-invalid""#));
    }

    #[test]
    fn test_bootstrap_select() {
        let widget = BootstrapSelect::new(vec![("no", "No"), ("yes", "Yes")]);
        let html = widget.render("attendingWithGuest", Some("yes"), &WidgetAttrs::new());
        assert!(html.contains(r#"class="form-select""#));
        assert!(html.contains(r#"value="yes" selected"#));
        assert!(html.starts_with(r#"<select class="form-select" id="id_attendingWithGuest" name="attendingWithGuest"><option value="no">"#));
    }
}
