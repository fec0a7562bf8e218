//! Views of a flow for the terminal.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::Serialize;

use eventreg_forms::{
    render_flow, ErrorMap, FieldValues, FlowState, RegistrationFlow, Snapshot, SubmissionSink,
};

/// Form action used in rendered HTML.
pub const FORM_ACTION: &str = "/register";

/// Dismiss action used in rendered HTML.
pub const DISMISS_ACTION: &str = "/register/close";

/// How a flow is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per view.
    Json,
    /// Bootstrap 5 markup.
    Html,
}

#[derive(Serialize)]
struct View<'a> {
    state: FlowState,
    values: &'a FieldValues,
    errors: &'a ErrorMap,
    snapshot: Option<&'a Snapshot>,
}

/// Renders the current state of `flow` in `format`.
///
/// # Errors
///
/// Fails only if JSON encoding fails.
pub fn render_view<S: SubmissionSink>(
    flow: &RegistrationFlow<S>,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(flow)),
        OutputFormat::Json => serde_json::to_string(&View {
            state: flow.state(),
            values: flow.values(),
            errors: flow.errors(),
            snapshot: flow.snapshot(),
        }),
        OutputFormat::Html => Ok(render_flow(flow, FORM_ACTION, DISMISS_ACTION)),
    }
}

fn render_text<S: SubmissionSink>(flow: &RegistrationFlow<S>) -> String {
    let mut out = String::new();

    if let Some(snapshot) = flow.snapshot() {
        out.push_str("Submission Complete\n");
        for line in snapshot.summary() {
            let _ = writeln!(out, "  {line}");
        }
        return out;
    }

    out.push_str("Event Registration Form\n");
    let values = flow.values();
    for (field, value) in values.iter() {
        if field == eventreg_forms::Field::GuestName && !values.guest_field_visible() {
            continue;
        }
        let _ = writeln!(out, "  {}: {value}", field.label());
        if let Some(message) = flow.errors().get(field) {
            let _ = writeln!(out, "    ! {message}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventreg_forms::Field;

    fn confirmed() -> RegistrationFlow {
        let mut flow = RegistrationFlow::new();
        flow.update(Field::Name, "Alice").unwrap();
        flow.update(Field::Email, "a@b.com").unwrap();
        flow.update(Field::Age, "30").unwrap();
        flow.submit();
        flow
    }

    #[test]
    fn test_text_editing_with_errors() {
        let mut flow = RegistrationFlow::new();
        flow.submit();
        let text = render_view(&flow, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Event Registration Form\n"));
        assert!(text.contains("    ! Name is required\n"));
        assert!(!text.contains("Guest Name"));
    }

    #[test]
    fn test_text_confirmation() {
        let text = render_view(&confirmed(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Submission Complete\n  Name: Alice\n  Email: a@b.com\n  Age: 30\n"
        );
    }

    #[test]
    fn test_json_view() {
        let json = render_view(&confirmed(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["state"], "confirmation_visible");
        assert_eq!(parsed["snapshot"]["name"], "Alice");
        assert_eq!(parsed["errors"], serde_json::json!({}));
    }

    #[test]
    fn test_html_view() {
        let html = render_view(&confirmed(), OutputFormat::Html).unwrap();
        assert!(html.contains("Submission Complete"));
        assert!(html.contains(FORM_ACTION));
    }
}
