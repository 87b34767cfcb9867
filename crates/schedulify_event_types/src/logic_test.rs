#[cfg(test)]
mod tests {
    use crate::logic::{
        create_event_type, delete_confirmation_path, delete_event_type, list_event_types,
        set_event_type_active, update_event_type, EventTypeError, EventTypeFormRequest,
        EventTypeOutcome,
    };
    use chrono::{Duration, Utc};
    use schedulify_common::models::{EventType, MeetingDuration, VideoCallSoftware};
    use schedulify_db::{DbError, EventTypeRepository};
    use std::sync::Mutex;

    /// In-memory stand-in for the SQL repository, honoring the same
    /// contract: per-user slug uniqueness and newest-first listing.
    #[derive(Default)]
    struct InMemoryEventTypes {
        records: Mutex<Vec<EventType>>,
    }

    impl EventTypeRepository for InMemoryEventTypes {
        async fn init_schema(&self) -> Result<(), DbError> {
            Ok(())
        }

        async fn insert(&self, event_type: EventType) -> Result<EventType, DbError> {
            let mut records = self.records.lock().unwrap();
            if records
                .iter()
                .any(|et| et.user_id == event_type.user_id && et.url == event_type.url)
            {
                return Err(DbError::Conflict("UNIQUE constraint failed".to_string()));
            }
            records.push(event_type.clone());
            Ok(event_type)
        }

        async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<EventType>, DbError> {
            let records = self.records.lock().unwrap();
            Ok(records
                .iter()
                .find(|et| et.user_id == user_id && et.id == id)
                .cloned())
        }

        async fn list_by_user(&self, user_id: &str) -> Result<Vec<EventType>, DbError> {
            let records = self.records.lock().unwrap();
            let mut listed: Vec<EventType> = records
                .iter()
                .filter(|et| et.user_id == user_id)
                .cloned()
                .collect();
            listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(listed)
        }

        async fn set_active(
            &self,
            user_id: &str,
            id: &str,
            active: bool,
        ) -> Result<bool, DbError> {
            let mut records = self.records.lock().unwrap();
            match records
                .iter_mut()
                .find(|et| et.user_id == user_id && et.id == id)
            {
                Some(record) => {
                    record.active = active;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn update(&self, event_type: EventType) -> Result<Option<EventType>, DbError> {
            let mut records = self.records.lock().unwrap();
            if records.iter().any(|et| {
                et.user_id == event_type.user_id
                    && et.url == event_type.url
                    && et.id != event_type.id
            }) {
                return Err(DbError::Conflict("UNIQUE constraint failed".to_string()));
            }
            match records
                .iter_mut()
                .find(|et| et.user_id == event_type.user_id && et.id == event_type.id)
            {
                Some(record) => {
                    record.title = event_type.title.clone();
                    record.url = event_type.url.clone();
                    record.description = event_type.description.clone();
                    record.duration = event_type.duration;
                    record.video_call_software = event_type.video_call_software;
                    Ok(Some(record.clone()))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, user_id: &str, id: &str) -> Result<bool, DbError> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|et| !(et.user_id == user_id && et.id == id));
            Ok(records.len() < before)
        }
    }

    fn valid_request() -> EventTypeFormRequest {
        EventTypeFormRequest {
            title: "30 min meeting".to_string(),
            url: "intro-call".to_string(),
            description: "".to_string(),
            duration: "30".to_string(),
            video_call_software: "Google Meet".to_string(),
        }
    }

    #[tokio::test]
    async fn creation_happy_path_yields_an_active_record() {
        let repo = InMemoryEventTypes::default();

        let outcome = create_event_type(&repo, "user_1", valid_request())
            .await
            .unwrap();

        match outcome {
            EventTypeOutcome::Saved(record) => {
                assert!(record.active);
                assert_eq!(record.duration, MeetingDuration::Min30);
                assert_eq!(record.video_call_software, VideoCallSoftware::GoogleMeet);
                assert_eq!(record.url, "intro-call");
                assert_eq!(record.description, None);
                assert!(!record.id.is_empty());
            }
            EventTypeOutcome::Invalid(errors) => panic!("unexpected field errors: {errors:?}"),
        }
    }

    #[tokio::test]
    async fn empty_title_is_rejected_per_field() {
        let repo = InMemoryEventTypes::default();

        let mut request = valid_request();
        request.title = "".to_string();
        let outcome = create_event_type(&repo, "user_1", request).await.unwrap();

        match outcome {
            EventTypeOutcome::Invalid(errors) => {
                assert!(!errors["title"].is_empty());
                assert!(!errors.contains_key("url"));
            }
            EventTypeOutcome::Saved(record) => panic!("should not have saved {record:?}"),
        }

        // Nothing was persisted; the form stays on-screen to redisplay.
        assert!(list_event_types(&repo, "user_1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_slug_surfaces_as_a_url_field_error() {
        let repo = InMemoryEventTypes::default();

        create_event_type(&repo, "user_1", valid_request())
            .await
            .unwrap();
        let outcome = create_event_type(&repo, "user_1", valid_request())
            .await
            .unwrap();

        match outcome {
            EventTypeOutcome::Invalid(errors) => {
                assert_eq!(
                    errors["url"],
                    vec!["This URL slug is already in use".to_string()]
                );
            }
            EventTypeOutcome::Saved(record) => panic!("should not have saved {record:?}"),
        }
    }

    #[tokio::test]
    async fn listing_is_strictly_newest_first() {
        let repo = InMemoryEventTypes::default();
        let base = Utc::now();

        for (i, slug) in ["first", "second", "third"].iter().enumerate() {
            let mut request = valid_request();
            request.url = slug.to_string();
            let outcome = create_event_type(&repo, "user_1", request).await.unwrap();
            if let EventTypeOutcome::Saved(record) = outcome {
                // Space the timestamps out deterministically.
                let mut records = repo.records.lock().unwrap();
                let stored = records.iter_mut().find(|et| et.id == record.id).unwrap();
                stored.created_at = base + Duration::minutes(i as i64);
            }
        }

        let listed = list_event_types(&repo, "user_1").await.unwrap();
        let slugs: Vec<&str> = listed.iter().map(|et| et.url.as_str()).collect();
        assert_eq!(slugs, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn set_active_last_intent_wins() {
        let repo = InMemoryEventTypes::default();
        let record = match create_event_type(&repo, "user_1", valid_request())
            .await
            .unwrap()
        {
            EventTypeOutcome::Saved(record) => record,
            EventTypeOutcome::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
        };

        // Calling twice in immediate succession settles on the requested state.
        set_event_type_active(&repo, "user_1", &record.id, true)
            .await
            .unwrap();
        set_event_type_active(&repo, "user_1", &record.id, true)
            .await
            .unwrap();

        let after = repo
            .find_by_id("user_1", &record.id)
            .await
            .unwrap()
            .unwrap();
        assert!(after.active);
    }

    #[tokio::test]
    async fn set_active_on_missing_record_is_not_found() {
        let repo = InMemoryEventTypes::default();

        let err = set_event_type_active(&repo, "user_1", "missing", false)
            .await
            .unwrap_err();
        assert!(matches!(err, EventTypeError::NotFound));
    }

    #[tokio::test]
    async fn update_preserves_identity_and_creation_time() {
        let repo = InMemoryEventTypes::default();
        let record = match create_event_type(&repo, "user_1", valid_request())
            .await
            .unwrap()
        {
            EventTypeOutcome::Saved(record) => record,
            EventTypeOutcome::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
        };

        let mut request = valid_request();
        request.title = "45 min deep dive".to_string();
        request.duration = "45".to_string();
        request.video_call_software = "Microsoft Teams".to_string();

        let outcome = update_event_type(&repo, "user_1", &record.id, request)
            .await
            .unwrap();

        match outcome {
            EventTypeOutcome::Saved(updated) => {
                assert_eq!(updated.id, record.id);
                assert_eq!(updated.created_at, record.created_at);
                assert_eq!(updated.title, "45 min deep dive");
                assert_eq!(updated.duration, MeetingDuration::Min45);
                assert_eq!(
                    updated.video_call_software,
                    VideoCallSoftware::MicrosoftTeams
                );
            }
            EventTypeOutcome::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
        }
    }

    #[tokio::test]
    async fn delete_is_scoped_to_the_owner() {
        let repo = InMemoryEventTypes::default();
        let record = match create_event_type(&repo, "user_1", valid_request())
            .await
            .unwrap()
        {
            EventTypeOutcome::Saved(record) => record,
            EventTypeOutcome::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
        };

        // Another user cannot delete it.
        let err = delete_event_type(&repo, "user_2", &record.id)
            .await
            .unwrap_err();
        assert!(matches!(err, EventTypeError::NotFound));

        delete_event_type(&repo, "user_1", &record.id).await.unwrap();
        assert!(list_event_types(&repo, "user_1").await.unwrap().is_empty());
    }

    #[test]
    fn delete_navigates_to_the_confirmation_view() {
        assert_eq!(
            delete_confirmation_path("et_123"),
            "/dashboard/event/et_123/delete"
        );
    }
}
