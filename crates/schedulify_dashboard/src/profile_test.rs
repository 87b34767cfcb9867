#[cfg(test)]
mod tests {
    use crate::profile::{
        submit_settings, ImageAffordance, ProfileSettingsState, SettingsError,
        SettingsFormRequest, SettingsOutcome, PROFILE_IMAGE_FIELD,
    };
    use chrono::Utc;
    use mockall::mock;
    use schedulify_common::models::User;
    use schedulify_common::services::NotificationService;
    use schedulify_db::{DbError, UserRepository};
    use schedulify_forms::{profile_settings_schema, FormSubmissionController};
    use std::sync::Mutex;

    mock! {
        pub Notifier {}

        impl NotificationService for Notifier {
            fn notify_success(&self, message: &str);
            fn notify_error(&self, message: &str);
        }
    }

    /// In-memory stand-in for the user repository.
    #[derive(Default)]
    struct InMemoryUsers {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUsers {
        fn with_user(user: User) -> Self {
            Self {
                users: Mutex::new(vec![user]),
            }
        }
    }

    impl UserRepository for InMemoryUsers {
        async fn init_schema(&self) -> Result<(), DbError> {
            Ok(())
        }

        async fn insert(&self, user: User) -> Result<User, DbError> {
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<User>, DbError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|user| user.id == id)
                .cloned())
        }

        async fn update_profile(
            &self,
            id: &str,
            full_name: &str,
            profile_image_url: Option<&str>,
        ) -> Result<Option<User>, DbError> {
            let mut users = self.users.lock().unwrap();
            match users.iter_mut().find(|user| user.id == id) {
                Some(user) => {
                    user.full_name = full_name.to_string();
                    user.profile_image_url = profile_image_url
                        .filter(|url| !url.is_empty())
                        .map(str::to_string);
                    Ok(Some(user.clone()))
                }
                None => Ok(None),
            }
        }
    }

    fn sample_user() -> User {
        User {
            id: "user_1".to_string(),
            username: "jan".to_string(),
            full_name: "Jan Marshall".to_string(),
            email: "jan@schedulify.example".to_string(),
            profile_image_url: Some("https://images.example/jan.png".to_string()),
            created_at: Some(Utc::now()),
        }
    }

    #[test]
    fn seeded_state_offers_image_with_remove() {
        let state = ProfileSettingsState::new(Some("https://images.example/jan.png"));

        assert_eq!(
            state.affordance(),
            ImageAffordance::ImageWithRemove {
                url: "https://images.example/jan.png".to_string()
            }
        );
    }

    #[test]
    fn delete_image_is_local_and_flips_the_affordance() {
        let mut state = ProfileSettingsState::new(Some("https://images.example/jan.png"));

        state.delete_image();

        assert_eq!(state.current_profile_image(), "");
        assert_eq!(state.affordance(), ImageAffordance::UploadDropzone);
    }

    #[test]
    fn delete_then_upload_round_trips_to_the_new_url() {
        let mut state = ProfileSettingsState::new(Some("https://images.example/old.png"));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify_success()
            .withf(|message| message == "Profile image uploaded")
            .times(1)
            .return_const(());

        state.delete_image();
        assert_eq!(state.affordance(), ImageAffordance::UploadDropzone);

        state.upload_completed("https://images.example/new.png", &notifier);

        assert_eq!(
            state.current_profile_image(),
            "https://images.example/new.png"
        );
        assert_eq!(
            state.affordance(),
            ImageAffordance::ImageWithRemove {
                url: "https://images.example/new.png".to_string()
            }
        );
    }

    #[test]
    fn upload_failure_notifies_and_leaves_state_untouched() {
        let state = ProfileSettingsState::new(Some("https://images.example/jan.png"));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify_error()
            .withf(|message| message == "upload quota exceeded")
            .times(1)
            .return_const(());

        state.upload_failed("upload quota exceeded", &notifier);

        assert_eq!(
            state.current_profile_image(),
            "https://images.example/jan.png"
        );
    }

    #[test]
    fn clearing_the_image_changes_the_hidden_field_identity() {
        let mut controller = FormSubmissionController::new(profile_settings_schema());
        let mut state = ProfileSettingsState::new(Some("https://images.example/jan.png"));

        state.sync_into(&mut controller);
        let seeded = controller.bind(PROFILE_IMAGE_FIELD);
        assert_eq!(seeded.initial_value, "https://images.example/jan.png");

        state.delete_image();
        state.sync_into(&mut controller);
        let cleared = controller.bind(PROFILE_IMAGE_FIELD);

        assert_eq!(cleared.initial_value, "");
        // The view must discard its stale drop-zone state.
        assert_ne!(cleared.identity_key, seeded.identity_key);

        // Syncing again without a change must not force another remount.
        state.sync_into(&mut controller);
        assert_eq!(
            controller.bind(PROFILE_IMAGE_FIELD).identity_key,
            cleared.identity_key
        );
    }

    #[tokio::test]
    async fn submitting_an_empty_image_clears_the_stored_value() {
        let users = InMemoryUsers::with_user(sample_user());

        let outcome = submit_settings(
            &users,
            "user_1",
            SettingsFormRequest {
                full_name: "Jan M. Marshall".to_string(),
                profile_image: "".to_string(),
            },
        )
        .await
        .unwrap();

        match outcome {
            SettingsOutcome::Saved(user) => {
                assert_eq!(user.full_name, "Jan M. Marshall");
                assert_eq!(user.profile_image_url, None);
            }
            SettingsOutcome::Invalid(errors) => panic!("unexpected field errors: {errors:?}"),
        }
    }

    #[tokio::test]
    async fn short_full_name_is_a_field_error() {
        let users = InMemoryUsers::with_user(sample_user());

        let outcome = submit_settings(
            &users,
            "user_1",
            SettingsFormRequest {
                full_name: "J".to_string(),
                profile_image: "".to_string(),
            },
        )
        .await
        .unwrap();

        match outcome {
            SettingsOutcome::Invalid(errors) => {
                assert!(!errors["full_name"].is_empty());
                assert!(!errors.contains_key("profile_image"));
            }
            SettingsOutcome::Saved(user) => panic!("should not have saved {user:?}"),
        }
    }

    #[tokio::test]
    async fn settings_for_an_unknown_user_are_not_found() {
        let users = InMemoryUsers::default();

        let err = submit_settings(
            &users,
            "missing",
            SettingsFormRequest {
                full_name: "Jan Marshall".to_string(),
                profile_image: "".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, SettingsError::NotFound));
    }
}
