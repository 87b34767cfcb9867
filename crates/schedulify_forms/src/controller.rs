// --- File: crates/schedulify_forms/src/controller.rs ---
//! One form's submission lifecycle.
//!
//! [`FormSubmissionController`] is a state machine over a single logical
//! form: it wires the validation engine to blur/input events, delegates
//! persistence to the external action collaborator, and projects per-field
//! [`FormFieldBinding`]s for the view to seed its uncontrolled inputs from.
//! It is deliberately independent of any UI framework's update scheduling.

use crate::schema::{FieldErrors, FormInput, FormSchema, FormValues};
use schedulify_common::services::{BoxFuture, BoxedError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// The persistence/action collaborator behind a form.
///
/// One-shot request/response: the already-validated value set goes out, and
/// either field errors or the created/updated record come back. The server
/// side re-validates with the same schema; client validation success alone
/// never short-circuits this call.
pub trait FormAction<R>: Send + Sync {
    fn submit(&self, values: FormValues) -> BoxFuture<'_, SubmissionOutcome<R>, BoxedError>;
}

/// What the action collaborator decided about a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome<R> {
    Success { record: R },
    Error { field_errors: FieldErrors },
}

/// The states a form moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// No submission yet.
    Idle,
    /// Blur/input-triggered local validation failed.
    ClientInvalid,
    /// Server action in flight.
    Submitting,
    /// The server returned field errors.
    ServerRejected,
    /// The server accepted; the routing collaborator takes over from here.
    Success,
}

/// Per-field view-facing projection of the form's current state.
///
/// `identity_key` changes whenever the seeded initial value changes, which
/// tells the view layer to discard and recreate uncontrolled input state
/// (after a failed submission repopulates fields, or after an external
/// mutation such as a local image deletion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldBinding {
    pub name: String,
    pub identity_key: String,
    pub initial_value: String,
    pub errors: Vec<String>,
}

/// How a call to [`FormSubmissionController::submit`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult<R> {
    /// A submission was already in flight; this one was not started.
    Ignored,
    /// Client-side validation failed; the action was never called.
    ClientInvalid(FieldErrors),
    /// The server rejected with field errors.
    ServerRejected(FieldErrors),
    /// The server accepted.
    Success(R),
    /// The action failed in a non-field-shaped way (e.g. transport).
    Failed(String),
    /// The result arrived after the controller was reset or unmounted.
    Stale,
}

#[derive(Debug, Clone)]
struct FieldSeed {
    value: String,
    revision: u64,
}

/// A ticket for an in-flight submission, used to detect staleness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitAttempt {
    generation: u64,
}

/// State machine over one logical form. See the module docs.
pub struct FormSubmissionController {
    schema: FormSchema,
    phase: FormPhase,
    seeds: BTreeMap<String, FieldSeed>,
    draft: FormInput,
    touched: BTreeSet<String>,
    errors: FieldErrors,
    generation: u64,
    mounted: bool,
}

impl FormSubmissionController {
    pub fn new(schema: FormSchema) -> Self {
        let seeds = schema
            .fields()
            .iter()
            .map(|rule| {
                (
                    rule.name.to_string(),
                    FieldSeed {
                        value: String::new(),
                        revision: 0,
                    },
                )
            })
            .collect();

        Self {
            schema,
            phase: FormPhase::Idle,
            seeds,
            draft: FormInput::new(),
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            generation: 0,
            mounted: true,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Project the view-facing binding for one field.
    ///
    /// Pure function of current state; unknown names yield an empty binding
    /// so the view renders nothing rather than panicking.
    pub fn bind(&self, name: &str) -> FormFieldBinding {
        let seed = self.seeds.get(name);
        let initial_value = seed.map(|s| s.value.clone()).unwrap_or_default();
        let revision = seed.map(|s| s.revision).unwrap_or(0);

        FormFieldBinding {
            name: name.to_string(),
            identity_key: format!("{}-{}", name, revision),
            initial_value,
            errors: self.errors.get(name).cloned().unwrap_or_default(),
        }
    }

    /// Reseed a field's initial value, e.g. when the hidden image field is
    /// cleared by a local delete. Bumps the identity key only when the
    /// value actually changed.
    pub fn set_initial(&mut self, name: &str, value: &str) {
        let seed = self.seeds.entry(name.to_string()).or_insert(FieldSeed {
            value: String::new(),
            revision: 0,
        });
        if seed.value != value {
            seed.value = value.to_string();
            seed.revision += 1;
        }
        self.draft.insert(name.to_string(), value.to_string());
    }

    /// A field lost focus: record its value and validate it.
    pub fn field_blurred(&mut self, name: &str, value: &str) {
        self.draft.insert(name.to_string(), value.to_string());
        self.touched.insert(name.to_string());
        self.revalidate();
    }

    /// A field's value changed. Fields are revalidated continuously once
    /// touched; untouched fields stay quiet until their first blur.
    pub fn field_input(&mut self, name: &str, value: &str) {
        self.draft.insert(name.to_string(), value.to_string());
        if self.touched.contains(name) {
            self.revalidate();
        }
    }

    fn revalidate(&mut self) {
        // A submission in flight owns the error state until it resolves.
        if self.phase == FormPhase::Submitting {
            return;
        }

        let outcome = self.schema.validate(&self.draft);
        match outcome {
            Ok(_) => {
                self.errors.clear();
                if matches!(self.phase, FormPhase::ClientInvalid | FormPhase::ServerRejected) {
                    self.phase = FormPhase::Idle;
                }
            }
            Err(all_errors) => {
                let touched = &self.touched;
                let visible: FieldErrors = all_errors
                    .into_iter()
                    .filter(|(name, _)| touched.contains(name))
                    .collect();
                self.errors = visible;
                if self.errors.is_empty() {
                    if self.phase == FormPhase::ClientInvalid {
                        self.phase = FormPhase::Idle;
                    }
                } else {
                    self.phase = FormPhase::ClientInvalid;
                }
            }
        }
    }

    /// Run a full submission against the action collaborator.
    ///
    /// Submissions are never pipelined: a second call while one is in
    /// flight is ignored. The result of the action is applied only if the
    /// controller has not been reset or unmounted in the meantime.
    pub async fn submit<R>(
        &mut self,
        action: &dyn FormAction<R>,
        input: FormInput,
    ) -> SubmitResult<R> {
        let (attempt, values) = match self.begin_submit(input) {
            Ok(started) => started,
            Err(result) => return result,
        };

        match action.submit(values).await {
            Ok(outcome) => self.complete_submit(attempt, outcome),
            Err(error) => self.fail_submit(attempt, error),
        }
    }

    /// First half of a submission: guard, validate client-side, move to
    /// `Submitting`. Split out so tests can interleave completions.
    pub fn begin_submit<R>(
        &mut self,
        input: FormInput,
    ) -> Result<(SubmitAttempt, FormValues), SubmitResult<R>> {
        if self.phase == FormPhase::Submitting {
            debug!("submission already in flight, ignoring");
            return Err(SubmitResult::Ignored);
        }

        self.draft = input;
        match self.schema.validate(&self.draft) {
            Err(field_errors) => {
                // Show every problem at once, not one field at a time.
                self.touched
                    .extend(field_errors.keys().cloned());
                self.errors = field_errors.clone();
                self.phase = FormPhase::ClientInvalid;
                Err(SubmitResult::ClientInvalid(field_errors))
            }
            Ok(values) => {
                self.phase = FormPhase::Submitting;
                self.errors.clear();
                Ok((
                    SubmitAttempt {
                        generation: self.generation,
                    },
                    values,
                ))
            }
        }
    }

    /// Apply the action collaborator's outcome for a given attempt.
    ///
    /// Results for a stale attempt (the controller was reset or unmounted
    /// while the call was in flight) are silently discarded.
    pub fn complete_submit<R>(
        &mut self,
        attempt: SubmitAttempt,
        outcome: SubmissionOutcome<R>,
    ) -> SubmitResult<R> {
        if !self.is_current(attempt) {
            return SubmitResult::Stale;
        }

        match outcome {
            SubmissionOutcome::Success { record } => {
                self.phase = FormPhase::Success;
                self.errors.clear();
                SubmitResult::Success(record)
            }
            SubmissionOutcome::Error { field_errors } => {
                self.phase = FormPhase::ServerRejected;
                // Annotate exactly the fields the server rejected, and
                // repopulate the seeds with what was submitted so the view
                // remounts inputs with the user's values intact.
                self.errors = field_errors.clone();
                self.touched.extend(field_errors.keys().cloned());
                let submitted = self.draft.clone();
                for (name, value) in submitted {
                    self.reseed(&name, &value);
                }
                SubmitResult::ServerRejected(field_errors)
            }
        }
    }

    /// Apply a non-field-shaped failure (e.g. transport) for an attempt.
    /// The form returns to an editable state; the caller is expected to
    /// surface a generic failure notification.
    pub fn fail_submit<R>(&mut self, attempt: SubmitAttempt, error: BoxedError) -> SubmitResult<R> {
        if !self.is_current(attempt) {
            return SubmitResult::Stale;
        }
        self.phase = FormPhase::Idle;
        SubmitResult::Failed(error.to_string())
    }

    /// Return to `Idle`, clearing all field errors and invalidating any
    /// in-flight submission.
    pub fn reset(&mut self) {
        self.phase = FormPhase::Idle;
        self.errors.clear();
        self.touched.clear();
        self.draft.clear();
        self.generation += 1;
        let names: Vec<String> = self.seeds.keys().cloned().collect();
        for name in names {
            self.reseed(&name, "");
        }
    }

    /// The view navigated away. In-flight results will be discarded.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn is_current(&self, attempt: SubmitAttempt) -> bool {
        self.mounted && attempt.generation == self.generation && self.phase == FormPhase::Submitting
    }

    fn reseed(&mut self, name: &str, value: &str) {
        if let Some(seed) = self.seeds.get_mut(name) {
            if seed.value != value {
                seed.value = value.to_string();
                seed.revision += 1;
            }
        }
    }
}
