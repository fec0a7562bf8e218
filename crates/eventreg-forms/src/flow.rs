//! Registration flow: the form plus its confirmation popup.

use serde::Serialize;
use tracing::debug;

use crate::error::{ErrorMap, Result};
use crate::fields::Field;
use crate::sink::{SubmissionSink, TracingSink};
use crate::state::{FieldValues, FormState};

/// Which view the flow is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    /// The form is shown and accepts input.
    Editing,
    /// The confirmation popup is shown over the form.
    ConfirmationVisible,
}

/// Values captured by the last successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot(FieldValues);

impl Snapshot {
    /// The captured values.
    #[must_use]
    pub const fn values(&self) -> &FieldValues {
        &self.0
    }

    /// Lines shown in the confirmation popup.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let values = &self.0;
        let mut lines = vec![
            format!("Name: {}", values.get(Field::Name)),
            format!("Email: {}", values.get(Field::Email)),
            format!("Age: {}", values.get(Field::Age)),
        ];
        if values.guest_field_visible() {
            lines.push(format!("Guest: {}", values.get(Field::GuestName)));
        }
        lines
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the confirmation is now visible.
    Confirmed,
    /// Validation failed; errors are available from the flow.
    Rejected,
    /// The confirmation was already visible; nothing happened.
    Ignored,
}

/// Drives the registration form through editing and confirmation.
#[derive(Debug)]
pub struct RegistrationFlow<S = TracingSink> {
    form: FormState,
    snapshot: Option<Snapshot>,
    sink: S,
}

impl Default for RegistrationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationFlow {
    /// Starts a flow with an empty form that logs accepted values.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl<S: SubmissionSink> RegistrationFlow<S> {
    /// Starts a flow with an empty form reporting to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            form: FormState::new(),
            snapshot: None,
            sink,
        }
    }

    /// The current view.
    #[must_use]
    pub const fn state(&self) -> FlowState {
        if self.snapshot.is_some() {
            FlowState::ConfirmationVisible
        } else {
            FlowState::Editing
        }
    }

    /// The underlying form.
    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    /// Current field values.
    #[must_use]
    pub const fn values(&self) -> &FieldValues {
        self.form.values()
    }

    /// Errors from the last submit attempt.
    #[must_use]
    pub const fn errors(&self) -> &ErrorMap {
        self.form.errors()
    }

    /// The captured values while the confirmation is visible.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Applies a field change while editing.
    ///
    /// Changes arriving while the confirmation is visible are dropped.
    ///
    /// # Errors
    ///
    /// Propagates [`FormState::update`] errors.
    pub fn update(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        if self.state() == FlowState::ConfirmationVisible {
            debug!(field = %field, "update ignored while confirmation is visible");
            return Ok(());
        }
        self.form.update(field, value)
    }

    /// Validates the form and, on success, shows the confirmation.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state() == FlowState::ConfirmationVisible {
            return SubmitOutcome::Ignored;
        }

        if !self.form.validate_and_submit() {
            return SubmitOutcome::Rejected;
        }

        let values = self.form.values().clone();
        self.sink.accepted(&values);
        self.snapshot = Some(Snapshot(values));
        debug!("confirmation shown");
        SubmitOutcome::Confirmed
    }

    /// Closes the confirmation. Field values are kept.
    ///
    /// Returns whether a confirmation was open.
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.snapshot.take().is_some();
        if was_open {
            debug!("confirmation dismissed");
        }
        was_open
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<FieldValues>>);

    impl SubmissionSink for Recorder {
        fn accepted(&self, values: &FieldValues) {
            self.0.borrow_mut().push(values.clone());
        }
    }

    fn fill_valid<S: SubmissionSink>(flow: &mut RegistrationFlow<S>) {
        flow.update(Field::Name, "Alice").unwrap();
        flow.update(Field::Email, "a@b.com").unwrap();
        flow.update(Field::Age, "30").unwrap();
    }

    #[test]
    fn test_starts_editing() {
        let flow = RegistrationFlow::new();
        assert_eq!(flow.state(), FlowState::Editing);
        assert!(flow.snapshot().is_none());
        assert!(flow.errors().is_empty());
    }

    #[test]
    fn test_rejected_submit_stays_editing() {
        let recorder = Recorder::default();
        let mut flow = RegistrationFlow::with_sink(&recorder);
        assert_eq!(flow.submit(), SubmitOutcome::Rejected);
        assert_eq!(flow.state(), FlowState::Editing);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_confirmed_submit_reports_once() {
        let recorder = Recorder::default();
        let mut flow = RegistrationFlow::with_sink(&recorder);
        fill_valid(&mut flow);
        assert_eq!(flow.submit(), SubmitOutcome::Confirmed);
        assert_eq!(flow.submit(), SubmitOutcome::Ignored);
        assert_eq!(recorder.0.borrow().len(), 1);
        assert_eq!(recorder.0.borrow()[0].get(Field::Name), "Alice");
    }

    #[test]
    fn test_updates_ignored_while_confirming() {
        let mut flow = RegistrationFlow::new();
        fill_valid(&mut flow);
        flow.submit();
        flow.update(Field::Name, "Mallory").unwrap();
        assert_eq!(flow.values().get(Field::Name), "Alice");
        assert_eq!(flow.snapshot().unwrap().values().get(Field::Name), "Alice");
    }

    #[test]
    fn test_dismiss_when_editing_is_noop() {
        let mut flow = RegistrationFlow::new();
        assert!(!flow.dismiss());
        assert_eq!(flow.state(), FlowState::Editing);
    }

    #[test]
    fn test_summary_lines() {
        let mut flow = RegistrationFlow::new();
        fill_valid(&mut flow);
        flow.update(Field::AttendingWithGuest, "yes").unwrap();
        flow.update(Field::GuestName, "Bob").unwrap();
        flow.submit();
        assert_eq!(
            flow.snapshot().unwrap().summary(),
            vec!["Name: Alice", "Email: a@b.com", "Age: 30", "Guest: Bob"]
        );
    }

    #[test]
    fn test_summary_hides_guest_when_alone() {
        let mut flow = RegistrationFlow::new();
        fill_valid(&mut flow);
        flow.update(Field::GuestName, "Bob").unwrap();
        flow.submit();
        assert_eq!(flow.snapshot().unwrap().summary().len(), 3);
    }
}
