// --- File: crates/schedulify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Runtime feature-flag handling
pub mod handlers; // Shared HTTP handlers and extractor helpers
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
pub mod routes; // Route definitions
pub mod services; // Service abstractions

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    conflict, config_error, external_service_error, internal_error, not_found,
    validation_error, Context, HttpStatusCode, SchedulifyError,
};

// Re-export HTTP utilities for easier access
pub use http::client::{create_client, HTTP_CLIENT};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// Re-export the session helper used by every dashboard handler
pub use handlers::require_user;

// Re-export feature flag handling utilities for easier access
pub use features::{is_feature_enabled, is_uploads_enabled};
