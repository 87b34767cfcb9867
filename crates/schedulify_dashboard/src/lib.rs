// --- File: crates/schedulify_dashboard/src/lib.rs ---
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod list;
#[cfg(test)]
mod list_test;
pub mod profile;
#[cfg(test)]
mod profile_test;
pub mod routes;
pub mod service;
pub mod toggle;

pub use handlers::DashboardState;
pub use list::{build_dashboard_view, copy_booking_link, DashboardView, EventTypeListItem};
pub use profile::{ImageAffordance, ProfileSettingsState};
pub use routes::routes;
pub use toggle::{OptimisticToggle, ToggleAttempt, ToggleState};
