#[cfg(test)]
mod tests {
    use crate::controller::{
        FormAction, FormPhase, FormSubmissionController, SubmissionOutcome, SubmitResult,
    };
    use crate::schema::{event_type_schema, FieldErrors, FormInput, FormValues};
    use schedulify_common::services::{BoxFuture, BoxedError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Action stub that replays a fixed outcome and counts invocations.
    struct StubAction {
        outcome: fn() -> Result<SubmissionOutcome<String>, BoxedError>,
        calls: AtomicUsize,
    }

    impl StubAction {
        fn succeeding() -> Self {
            Self {
                outcome: || {
                    Ok(SubmissionOutcome::Success {
                        record: "et_created".to_string(),
                    })
                },
                calls: AtomicUsize::new(0),
            }
        }

        fn rejecting() -> Self {
            Self {
                outcome: || {
                    let field_errors = FieldErrors::from([(
                        "url".to_string(),
                        vec!["Url is already taken".to_string()],
                    )]);
                    Ok(SubmissionOutcome::Error { field_errors })
                },
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                outcome: || {
                    Err(BoxedError(
                        "connection reset".to_string().into(),
                    ))
                },
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl FormAction<String> for StubAction {
        fn submit(&self, _values: FormValues) -> BoxFuture<'_, SubmissionOutcome<String>, BoxedError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let outcome = (self.outcome)();
            Box::pin(async move { outcome })
        }
    }

    fn valid_input() -> FormInput {
        FormInput::from([
            ("title".to_string(), "30 min meeting".to_string()),
            ("url".to_string(), "intro-call".to_string()),
            ("duration".to_string(), "30".to_string()),
            (
                "video_call_software".to_string(),
                "Google Meet".to_string(),
            ),
        ])
    }

    #[test]
    fn starts_idle_with_clean_bindings() {
        let controller = FormSubmissionController::new(event_type_schema());
        assert_eq!(controller.phase(), FormPhase::Idle);

        let binding = controller.bind("title");
        assert_eq!(binding.name, "title");
        assert_eq!(binding.identity_key, "title-0");
        assert!(binding.errors.is_empty());
    }

    #[test]
    fn blur_with_invalid_value_enters_client_invalid() {
        let mut controller = FormSubmissionController::new(event_type_schema());
        controller.field_blurred("title", "");

        assert_eq!(controller.phase(), FormPhase::ClientInvalid);
        assert!(!controller.bind("title").errors.is_empty());
        // Untouched fields stay quiet even though they are also empty.
        assert!(controller.bind("url").errors.is_empty());
    }

    #[test]
    fn touched_fields_revalidate_on_input() {
        let mut controller = FormSubmissionController::new(event_type_schema());
        controller.field_blurred("url", "a");
        assert_eq!(controller.phase(), FormPhase::ClientInvalid);

        // Still failing: stays ClientInvalid with fresh messages.
        controller.field_input("url", "ab");
        assert_eq!(controller.phase(), FormPhase::ClientInvalid);
        assert!(!controller.bind("url").errors.is_empty());

        // The field recovers once its value is valid.
        controller.field_input("url", "intro-call");
        assert!(controller.bind("url").errors.is_empty());
    }

    #[test]
    fn identity_key_changes_only_when_seed_changes() {
        let mut controller = FormSubmissionController::new(event_type_schema());
        let before = controller.bind("url").identity_key;

        controller.set_initial("url", "intro-call");
        let reseeded = controller.bind("url").identity_key;
        assert_ne!(before, reseeded);

        // Same value again: the view must not be forced to remount.
        controller.set_initial("url", "intro-call");
        assert_eq!(controller.bind("url").identity_key, reseeded);

        assert_eq!(controller.bind("url").initial_value, "intro-call");
    }

    #[tokio::test]
    async fn happy_path_reaches_success() {
        let mut controller = FormSubmissionController::new(event_type_schema());
        let action = StubAction::succeeding();

        let result = controller.submit(&action, valid_input()).await;

        assert_eq!(result, SubmitResult::Success("et_created".to_string()));
        assert_eq!(controller.phase(), FormPhase::Success);
        assert_eq!(action.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn client_invalid_input_never_reaches_the_action() {
        let mut controller = FormSubmissionController::new(event_type_schema());
        let action = StubAction::succeeding();

        let mut input = valid_input();
        input.insert("title".to_string(), "".to_string());
        let result = controller.submit(&action, input).await;

        match result {
            SubmitResult::ClientInvalid(errors) => {
                assert!(errors.contains_key("title"));
                assert!(!errors.contains_key("url"));
            }
            other => panic!("expected ClientInvalid, got {:?}", other),
        }
        assert_eq!(controller.phase(), FormPhase::ClientInvalid);
        assert_eq!(action.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn server_rejection_annotates_exact_fields_and_reseeds() {
        let mut controller = FormSubmissionController::new(event_type_schema());
        let action = StubAction::rejecting();

        let result = controller.submit(&action, valid_input()).await;

        match result {
            SubmitResult::ServerRejected(errors) => {
                assert_eq!(errors["url"], vec!["Url is already taken".to_string()]);
            }
            other => panic!("expected ServerRejected, got {:?}", other),
        }
        assert_eq!(controller.phase(), FormPhase::ServerRejected);

        // The rejected field carries the server message and the submitted
        // value came back as the new seed, under a fresh identity key.
        let binding = controller.bind("url");
        assert_eq!(binding.errors, vec!["Url is already taken".to_string()]);
        assert_eq!(binding.initial_value, "intro-call");
        assert_ne!(binding.identity_key, "url-0");

        // Fields the server did not reject are unannotated.
        assert!(controller.bind("title").errors.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_returns_the_form_to_editable() {
        let mut controller = FormSubmissionController::new(event_type_schema());
        let action = StubAction::failing();

        let result = controller.submit(&action, valid_input()).await;

        assert_eq!(
            result,
            SubmitResult::Failed("connection reset".to_string())
        );
        assert_eq!(controller.phase(), FormPhase::Idle);
    }

    #[test]
    fn submissions_are_never_pipelined() {
        let mut controller = FormSubmissionController::new(event_type_schema());

        let started = controller.begin_submit::<String>(valid_input());
        assert!(started.is_ok());
        assert_eq!(controller.phase(), FormPhase::Submitting);

        // A second submit while one is in flight is ignored outright.
        match controller.begin_submit::<String>(valid_input()) {
            Err(SubmitResult::Ignored) => {}
            other => panic!("expected Ignored, got {:?}", other.err()),
        }
    }

    #[test]
    fn stale_results_are_discarded_after_reset() {
        let mut controller = FormSubmissionController::new(event_type_schema());
        let (attempt, _values) = controller.begin_submit::<String>(valid_input()).unwrap();

        // The user navigated away while the action was in flight.
        controller.reset();

        let result = controller.complete_submit(
            attempt,
            SubmissionOutcome::Success {
                record: "et_created".to_string(),
            },
        );
        assert_eq!(result, SubmitResult::Stale);
        assert_eq!(controller.phase(), FormPhase::Idle);
    }

    #[test]
    fn stale_results_are_discarded_after_unmount() {
        let mut controller = FormSubmissionController::new(event_type_schema());
        let (attempt, _values) = controller.begin_submit::<String>(valid_input()).unwrap();

        controller.unmount();

        let result = controller.complete_submit(
            attempt,
            SubmissionOutcome::Success {
                record: "et_created".to_string(),
            },
        );
        assert_eq!(result, SubmitResult::Stale);
        assert!(!controller.is_mounted());
    }

    #[test]
    fn reset_clears_errors_and_returns_to_idle() {
        let mut controller = FormSubmissionController::new(event_type_schema());
        controller.field_blurred("title", "");
        assert_eq!(controller.phase(), FormPhase::ClientInvalid);

        controller.reset();

        assert_eq!(controller.phase(), FormPhase::Idle);
        assert!(controller.bind("title").errors.is_empty());
    }
}
