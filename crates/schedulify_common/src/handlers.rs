// --- File: crates/schedulify_common/src/handlers.rs ---
//! Shared HTTP handlers and extractor helpers.
//!
//! Identity resolution lives here: the session collaborator (an upstream
//! auth layer) injects the authenticated user's id as the `x-user-id`
//! request header, and every dashboard handler resolves it through
//! [`require_user`]. This core never validates credentials itself.

use crate::error::{HttpStatusCode, SchedulifyError};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::{json, Value};

/// Header carrying the authenticated user's id, set by the session layer.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolve the current user's id from the request headers.
///
/// A missing or malformed header means the session could not be resolved;
/// per the dashboard's error policy that is fatal for the current view, so
/// callers surface it as 404 rather than rendering a partial dashboard.
pub fn require_user(headers: &HeaderMap) -> Result<String, (StatusCode, String)> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            let err = SchedulifyError::NotFoundError("Session not found.".to_string());
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, err.to_string())
        })?;

    Ok(user_id.to_string())
}

/// Liveness probe handler.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
