// --- File: crates/schedulify_forms/src/lib.rs ---
// Declare modules within this crate
pub mod controller;
#[cfg(test)]
mod controller_test;
pub mod schema;
#[cfg(test)]
mod schema_proptest;

pub use controller::{
    FormAction, FormFieldBinding, FormPhase, FormSubmissionController, SubmissionOutcome,
    SubmitResult,
};
pub use schema::{
    event_type_schema, profile_settings_schema, FieldErrors, FieldKind, FieldRule, FormInput,
    FormSchema, FormValues, Value,
};
