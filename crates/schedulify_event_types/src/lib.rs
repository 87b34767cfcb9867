// --- File: crates/schedulify_event_types/src/lib.rs ---
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_test;
pub mod routes;

pub use handlers::EventTypesState;
pub use routes::routes;

// Re-export the shared models this crate's operations revolve around
pub use schedulify_common::models::{EventType, MeetingDuration, VideoCallSoftware};
