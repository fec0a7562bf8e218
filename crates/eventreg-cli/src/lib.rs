//! Terminal host for the event registration flow.
//!
//! The binary drives a [`RegistrationFlow`](eventreg_forms::RegistrationFlow)
//! either for a single submission or as a line-oriented session on stdin.

pub mod output;
pub mod session;

pub use output::{render_view, OutputFormat};
pub use session::{run_session, Command};
