//! # eventreg-forms
//!
//! Event registration form with field validation and a confirmation popup.
//!
//! This crate provides:
//! - The registration field set and its validators
//! - [`FormState`], holding field values and the last validation errors
//! - [`RegistrationFlow`], switching between editing and confirmation
//! - Bootstrap 5 rendering of the form and the popup
//!
//! ## Quick Start
//!
//! ```rust
//! use eventreg_forms::{Field, FlowState, RegistrationFlow, SubmitOutcome};
//!
//! let mut flow = RegistrationFlow::new();
//! flow.update(Field::Name, "Alice").unwrap();
//! flow.update(Field::Email, "alice@example.com").unwrap();
//! flow.update(Field::Age, "30").unwrap();
//!
//! assert_eq!(flow.submit(), SubmitOutcome::Confirmed);
//! assert_eq!(flow.state(), FlowState::ConfirmationVisible);
//! assert_eq!(flow.snapshot().unwrap().values().get(Field::Name), "Alice");
//!
//! flow.dismiss();
//! assert_eq!(flow.state(), FlowState::Editing);
//! assert_eq!(flow.values().get(Field::Name), "Alice");
//! ```
//!
//! ## Validation
//!
//! Validation failures are data, not errors:
//!
//! ```rust
//! use eventreg_forms::{validate, Field, FieldValues};
//!
//! let mut values = FieldValues::default();
//! values.set(Field::Email, "bad").unwrap();
//! let errors = validate(&values);
//! assert_eq!(errors.get(Field::Name), Some("Name is required"));
//! assert_eq!(errors.get(Field::Email), Some("Email is invalid"));
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use eventreg_forms::{render_flow, RegistrationFlow};
//!
//! let flow = RegistrationFlow::new();
//! let html = render_flow(&flow, "/register", "/register/close");
//! assert!(html.contains("Event Registration Form"));
//! ```

mod confirmation;
mod error;
pub mod fields;
mod flow;
mod form;
mod sink;
mod state;
pub mod validation;
pub mod widgets;

pub use confirmation::{render_confirmation, render_flow};
pub use error::{ErrorMap, FormError, Result};
pub use fields::{Field, GUEST_CHOICES};
pub use flow::{FlowState, RegistrationFlow, Snapshot, SubmitOutcome};
pub use form::{
    registration_fields, render_bootstrap_field, render_registration_form, FormBuilder,
    FormFieldDef,
};
pub use sink::{SubmissionSink, TracingSink};
pub use state::{FieldValues, FormState};
pub use validation::validate;
