// --- File: crates/schedulify_common/src/routes.rs ---
use crate::handlers::health_check;
use axum::{routing::get, Router};

/// Creates a router containing the shared service routes.
pub fn routes() -> Router {
    Router::new().route("/health", get(health_check))
}
