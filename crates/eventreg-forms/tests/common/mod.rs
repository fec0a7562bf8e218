#![allow(dead_code)]

use std::cell::RefCell;

use eventreg_forms::{Field, FieldValues, RegistrationFlow, SubmissionSink};

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub accepted: RefCell<Vec<FieldValues>>,
}

impl SubmissionSink for RecordingSink {
    fn accepted(&self, values: &FieldValues) {
        self.accepted.borrow_mut().push(values.clone());
    }
}

pub fn values(
    name: &str,
    email: &str,
    age: &str,
    attending_with_guest: &str,
    guest_name: &str,
) -> FieldValues {
    let mut values = FieldValues::default();
    for (field, value) in [
        (Field::Name, name),
        (Field::Email, email),
        (Field::Age, age),
        (Field::AttendingWithGuest, attending_with_guest),
        (Field::GuestName, guest_name),
    ] {
        values
            .set(field, value)
            .unwrap_or_else(|e| panic!("Failed to set {field}: {e}"));
    }
    values
}

pub fn alice() -> FieldValues {
    values("Alice", "a@b.com", "30", "no", "")
}

/// Feeds every field of `values` into the flow as input events.
pub fn fill<S: SubmissionSink>(flow: &mut RegistrationFlow<S>, values: &FieldValues) {
    for field in Field::ALL {
        flow.update(field, values.get(field))
            .unwrap_or_else(|e| panic!("Failed to update {field}: {e}"));
    }
}
