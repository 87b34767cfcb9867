#[cfg(test)]
mod tests {
    use crate::list::{build_dashboard_view, copy_booking_link, DashboardView, ListContext};
    use chrono::{Duration, Utc};
    use schedulify_common::models::{EventType, MeetingDuration, VideoCallSoftware};
    use schedulify_common::services::{BoxFuture, BoxedError, ClipboardService, NotificationService};
    use std::sync::Mutex;

    fn context() -> ListContext {
        ListContext {
            public_base_url: "https://schedulify.example".to_string(),
            username: "jan".to_string(),
        }
    }

    fn record(slug: &str, minutes_ago: i64) -> EventType {
        let mut record = EventType::new(
            format!("et_{slug}"),
            "user_1".to_string(),
            format!("{slug} meeting"),
            slug.to_string(),
            None,
            MeetingDuration::Min30,
            VideoCallSoftware::GoogleMeet,
        );
        record.created_at = Utc::now() - Duration::minutes(minutes_ago);
        record
    }

    #[derive(Default)]
    struct RecordingClipboard {
        written: Mutex<Vec<String>>,
        fail: bool,
    }

    impl ClipboardService for RecordingClipboard {
        type Error = BoxedError;

        fn write_text(&self, text: &str) -> BoxFuture<'_, (), Self::Error> {
            let text = text.to_string();
            Box::pin(async move {
                if self.fail {
                    return Err(BoxedError("clipboard unavailable".to_string().into()));
                }
                self.written.lock().unwrap().push(text);
                Ok(())
            })
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        errors: Mutex<Vec<String>>,
        successes: Mutex<Vec<String>>,
    }

    impl NotificationService for RecordingNotifier {
        fn notify_success(&self, message: &str) {
            self.successes.lock().unwrap().push(message.to_string());
        }

        fn notify_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn empty_collection_renders_the_empty_state_not_the_grid() {
        let view = build_dashboard_view(&context(), Vec::new());

        match view {
            DashboardView::Empty {
                title, create_href, ..
            } => {
                assert_eq!(title, "You have no Event Types");
                assert_eq!(create_href, "/dashboard/new");
            }
            DashboardView::Grid { items } => panic!("expected empty state, got {items:?}"),
        }
    }

    #[test]
    fn grid_is_strictly_descending_by_creation_time() {
        let records = vec![record("middle", 10), record("oldest", 20), record("newest", 0)];

        let view = build_dashboard_view(&context(), records);

        match view {
            DashboardView::Grid { items } => {
                let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
                assert_eq!(ids, vec!["et_newest", "et_middle", "et_oldest"]);
            }
            DashboardView::Empty { .. } => panic!("expected grid"),
        }
    }

    #[test]
    fn booking_url_preserves_segment_order_and_separator() {
        assert_eq!(
            context().booking_url("intro-call"),
            "https://schedulify.example/jan/intro-call"
        );

        // A trailing slash on the configured base must not double up.
        let trailing = ListContext {
            public_base_url: "https://schedulify.example/".to_string(),
            username: "jan".to_string(),
        };
        assert_eq!(
            trailing.booking_url("intro-call"),
            "https://schedulify.example/jan/intro-call"
        );
    }

    #[test]
    fn items_carry_their_five_independent_action_targets() {
        let view = build_dashboard_view(&context(), vec![record("intro-call", 0)]);

        let items = match view {
            DashboardView::Grid { items } => items,
            DashboardView::Empty { .. } => panic!("expected grid"),
        };
        let item = &items[0];

        assert_eq!(item.booking_url, "https://schedulify.example/jan/intro-call");
        assert_eq!(item.edit_href, "/dashboard/event/et_intro-call");
        assert_eq!(item.delete_href, "/dashboard/event/et_intro-call/delete");
        assert_eq!(item.duration_label, "30 Minutes Meeting");
        assert!(item.active);
    }

    #[tokio::test]
    async fn copy_link_writes_verbatim_and_confirms() {
        let clipboard = RecordingClipboard::default();
        let notifier = RecordingNotifier::default();
        let url = context().booking_url("intro-call");

        let copied = copy_booking_link(&clipboard, &notifier, &url).await;

        assert!(copied);
        assert_eq!(
            clipboard.written.lock().unwrap().as_slice(),
            &["https://schedulify.example/jan/intro-call".to_string()]
        );
        assert_eq!(
            notifier.successes.lock().unwrap().as_slice(),
            &["URL copied to clipboard".to_string()]
        );
    }

    #[tokio::test]
    async fn copy_link_failure_ends_in_an_error_notification() {
        let clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();

        let copied = copy_booking_link(&clipboard, &notifier, "https://x/y/z").await;

        assert!(!copied);
        assert!(clipboard.written.lock().unwrap().is_empty());
        assert_eq!(notifier.errors.lock().unwrap().len(), 1);
    }
}
