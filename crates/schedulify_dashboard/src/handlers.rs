// --- File: crates/schedulify_dashboard/src/handlers.rs ---
use crate::list::{build_dashboard_view, DashboardView, ListContext};
use crate::profile::{submit_settings, SettingsError, SettingsFormRequest, SettingsOutcome};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use schedulify_common::models::User;
use schedulify_common::require_user;
use schedulify_common::services::{BoxedError, UploadService, UploadedImage};
use schedulify_config::AppConfig;
use schedulify_db::{SqlEventTypeRepository, SqlUserRepository, UserRepository};
use schedulify_db::EventTypeRepository;
use schedulify_forms::SubmissionOutcome;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

// State for dashboard handlers
#[derive(Clone)]
pub struct DashboardState {
    pub config: Arc<AppConfig>,
    pub users: Arc<SqlUserRepository>,
    pub event_types: Arc<SqlEventTypeRepository>,
    /// Present only when the upload collaborator is configured.
    pub upload_service: Option<Arc<dyn UploadService<Error = BoxedError>>>,
}

/// Everything the dashboard page renders.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardResponse {
    pub username: String,
    pub view: DashboardView,
}

/// Seed data for the settings form.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SettingsView {
    pub full_name: String,
    /// Rendered read-only; never part of the submitted payload.
    pub email: String,
    /// Empty string when the user has no image.
    pub profile_image: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct UploadQuery {
    pub file_name: String,
}

/// Handler for the dashboard page: the user's event types, newest first,
/// or the empty state. An unresolvable user renders nothing but 404;
/// a partial dashboard is never shown.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/dashboard", // Relative to /api
    responses(
        (status = 200, description = "Dashboard view model", body = DashboardResponse),
        (status = 404, description = "Session or user not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
))]
pub async fn get_dashboard_handler(
    State(state): State<Arc<DashboardState>>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>, (StatusCode, String)> {
    let user_id = require_user(&headers)?;

    let user = state
        .users
        .find_by_id(&user_id)
        .await
        .map_err(db_failure)?
        .ok_or((StatusCode::NOT_FOUND, "User not found.".to_string()))?;

    let records = state
        .event_types
        .list_by_user(&user_id)
        .await
        .map_err(db_failure)?;

    let context = ListContext {
        public_base_url: state.config.public_base_url.clone(),
        username: user.username.clone(),
    };

    Ok(Json(DashboardResponse {
        username: user.username,
        view: build_dashboard_view(&context, records),
    }))
}

/// Handler providing the settings form's seed values.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/dashboard/settings",
    responses(
        (status = 200, description = "Settings form seed values", body = SettingsView),
        (status = 404, description = "Session or user not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
))]
pub async fn get_settings_handler(
    State(state): State<Arc<DashboardState>>,
    headers: HeaderMap,
) -> Result<Json<SettingsView>, (StatusCode, String)> {
    let user_id = require_user(&headers)?;

    let user = state
        .users
        .find_by_id(&user_id)
        .await
        .map_err(db_failure)?
        .ok_or((StatusCode::NOT_FOUND, "User not found.".to_string()))?;

    Ok(Json(SettingsView {
        full_name: user.full_name,
        email: user.email,
        profile_image: user.profile_image_url.unwrap_or_default(),
    }))
}

/// Handler for the settings form submission.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/dashboard/settings",
    request_body = SettingsFormRequest,
    responses(
        (status = 200, description = "Settings saved"),
        (status = 404, description = "Session or user not found"),
        (status = 422, description = "Validation failed; field errors returned"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
))]
pub async fn submit_settings_handler(
    State(state): State<Arc<DashboardState>>,
    headers: HeaderMap,
    Json(payload): Json<SettingsFormRequest>,
) -> Result<(StatusCode, Json<SubmissionOutcome<User>>), (StatusCode, String)> {
    let user_id = require_user(&headers)?;

    match submit_settings(state.users.as_ref(), &user_id, payload).await {
        Ok(SettingsOutcome::Saved(record)) => {
            Ok((StatusCode::OK, Json(SubmissionOutcome::Success { record })))
        }
        Ok(SettingsOutcome::Invalid(field_errors)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubmissionOutcome::Error { field_errors }),
        )),
        Err(SettingsError::NotFound) => {
            Err((StatusCode::NOT_FOUND, "User not found.".to_string()))
        }
        Err(SettingsError::DatabaseError(msg)) => {
            info!("Settings database failure: {}", msg);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save settings.".to_string(),
            ))
        }
    }
}

/// Handler proxying an avatar upload to the image-hosting collaborator.
///
/// The form itself never sees the transport: on success the client puts
/// the returned URL into the hidden image field.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/dashboard/settings/avatar",
    params(UploadQuery),
    responses(
        (status = 200, description = "Image uploaded, hosted URL returned", body = UploadedImage),
        (status = 404, description = "Session not found"),
        (status = 413, description = "Image exceeds the configured size limit"),
        (status = 502, description = "Upload collaborator failed"),
        (status = 503, description = "Uploads are not configured")
    ),
    tag = "Dashboard"
))]
pub async fn upload_avatar_handler(
    State(state): State<Arc<DashboardState>>,
    headers: HeaderMap,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> Result<Json<UploadedImage>, (StatusCode, String)> {
    require_user(&headers)?;

    let upload_service = state.upload_service.as_ref().ok_or((
        StatusCode::SERVICE_UNAVAILABLE,
        "Image uploads are not configured.".to_string(),
    ))?;

    let max_size = state
        .config
        .uploads
        .as_ref()
        .and_then(|uploads| uploads.max_size_bytes);
    if let Some(max_size) = max_size {
        if body.len() as u64 > max_size {
            return Err((
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("Image exceeds the {} byte limit.", max_size),
            ));
        }
    }

    match upload_service
        .upload_image(&query.file_name, body.to_vec())
        .await
    {
        Ok(uploaded) => Ok(Json(uploaded)),
        Err(err) => {
            info!("Avatar upload failed: {}", err);
            Err((StatusCode::BAD_GATEWAY, err.to_string()))
        }
    }
}

fn db_failure(err: schedulify_db::DbError) -> (StatusCode, String) {
    info!("Dashboard database failure: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to reach dashboard storage.".to_string(),
    )
}
