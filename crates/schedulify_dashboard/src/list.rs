// --- File: crates/schedulify_dashboard/src/list.rs ---
//! Event-type list composition.
//!
//! Projects a user's persisted event types into what the dashboard
//! renders: either a distinct empty state with a single call-to-action,
//! or a grid of items, newest first, each carrying its five independent
//! actions (preview, copy link, edit, delete, active switch).

use schedulify_common::models::EventType;
use schedulify_common::services::{BoxedError, ClipboardService, NotificationService};
use serde::Serialize;
use tracing::warn;

/// What the list needs to compose public booking URLs.
#[derive(Debug, Clone)]
pub struct ListContext {
    /// Configured base URL, e.g. "https://schedulify.example".
    pub public_base_url: String,
    /// The owner's username, the namespace segment of every booking URL.
    pub username: String,
}

impl ListContext {
    /// The public booking URL for one slug.
    ///
    /// Segment order and separator are compatibility-relevant: the exact
    /// string is both rendered as the preview link and copied verbatim.
    pub fn booking_url(&self, slug: &str) -> String {
        format!(
            "{}/{}/{}",
            self.public_base_url.trim_end_matches('/'),
            self.username,
            slug
        )
    }
}

/// One rendered event-type card and its action targets.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EventTypeListItem {
    pub id: String,
    pub title: String,
    pub duration_minutes: i64,
    /// Card subtitle, e.g. "30 Minutes Meeting".
    pub duration_label: String,
    /// Current active flag; seeds the item's optimistic switch.
    pub active: bool,
    /// External preview link and copy-link payload.
    pub booking_url: String,
    pub edit_href: String,
    /// Navigation target of the delete action; deletion itself happens
    /// behind this confirmation view.
    pub delete_href: String,
}

/// The dashboard body: empty state or grid, never both.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardView {
    Empty {
        title: String,
        description: String,
        button_text: String,
        create_href: String,
    },
    Grid {
        items: Vec<EventTypeListItem>,
    },
}

/// Build the dashboard view for a set of persisted records.
///
/// Ordering is enforced here as well as in the query: the rendered list is
/// always strictly descending by creation time.
pub fn build_dashboard_view(context: &ListContext, mut records: Vec<EventType>) -> DashboardView {
    if records.is_empty() {
        return DashboardView::Empty {
            title: "You have no Event Types".to_string(),
            description: "You can create your first event type by clicking the button above."
                .to_string(),
            button_text: "Add Event Type".to_string(),
            create_href: "/dashboard/new".to_string(),
        };
    }

    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let items = records
        .into_iter()
        .map(|record| EventTypeListItem {
            booking_url: context.booking_url(&record.url),
            edit_href: format!("/dashboard/event/{}", record.id),
            delete_href: schedulify_event_types::logic::delete_confirmation_path(&record.id),
            duration_minutes: record.duration.minutes(),
            duration_label: format!("{} Minutes Meeting", record.duration.minutes()),
            id: record.id,
            title: record.title,
            active: record.active,
        })
        .collect();

    DashboardView::Grid { items }
}

/// Copy a booking URL to the clipboard and surface the outcome.
///
/// The write can fail; either way the result ends in a transient
/// notification and never escapes silently.
pub async fn copy_booking_link(
    clipboard: &dyn ClipboardService<Error = BoxedError>,
    notifier: &dyn NotificationService,
    booking_url: &str,
) -> bool {
    match clipboard.write_text(booking_url).await {
        Ok(()) => {
            notifier.notify_success("URL copied to clipboard");
            true
        }
        Err(err) => {
            warn!("clipboard write failed: {}", err);
            notifier.notify_error("Could not copy the link");
            false
        }
    }
}
