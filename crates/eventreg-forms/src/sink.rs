//! Diagnostic sink for accepted registrations.

use tracing::{info, warn};

use crate::state::FieldValues;

/// Receives the values of every accepted submission.
///
/// Delivery is fire-and-forget: a sink cannot fail the submission or
/// change the flow.
pub trait SubmissionSink {
    /// Called once per successful submit with the accepted values.
    fn accepted(&self, values: &FieldValues);
}

/// Sink that logs accepted values as JSON through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn accepted(&self, values: &FieldValues) {
        match serde_json::to_string(values) {
            Ok(json) => info!(target: "eventreg::submission", values = %json, "registration accepted"),
            Err(e) => warn!(target: "eventreg::submission", error = %e, "failed to encode accepted values"),
        }
    }
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for &S {
    fn accepted(&self, values: &FieldValues) {
        (**self).accepted(values);
    }
}
