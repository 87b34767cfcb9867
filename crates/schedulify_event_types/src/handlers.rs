// --- File: crates/schedulify_event_types/src/handlers.rs ---
use crate::logic::{
    create_event_type, delete_event_type, list_event_types, set_event_type_active,
    update_event_type, EventTypeError, EventTypeFormRequest, EventTypeOutcome, MutationAck,
    SetActiveRequest,
};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use schedulify_common::models::EventType;
use schedulify_common::require_user;
use schedulify_config::AppConfig;
use schedulify_db::SqlEventTypeRepository;
use schedulify_forms::SubmissionOutcome;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

// State for event-type handlers
#[derive(Clone)]
pub struct EventTypesState {
    pub config: Arc<AppConfig>,
    pub repo: Arc<SqlEventTypeRepository>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EventTypeListResponse {
    pub event_types: Vec<EventType>,
}

fn map_error(err: EventTypeError) -> (StatusCode, String) {
    match err {
        EventTypeError::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
        EventTypeError::DatabaseError(_) => {
            info!("Event type database failure: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to reach event type storage.".to_string(),
            )
        }
        EventTypeError::InternalError(_) => {
            info!("Event type internal failure: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error.".to_string(),
            )
        }
    }
}

/// Handler to create a new event type from the creation form.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/event-types", // Relative to /api
    request_body = EventTypeFormRequest,
    responses(
        (status = 200, description = "Event type created"),
        (status = 404, description = "Session could not be resolved"),
        (status = 422, description = "Validation failed; field errors returned"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Event Types"
))]
pub async fn create_event_type_handler(
    State(state): State<Arc<EventTypesState>>,
    headers: HeaderMap,
    Json(payload): Json<EventTypeFormRequest>,
) -> Result<(StatusCode, Json<SubmissionOutcome<EventType>>), (StatusCode, String)> {
    let user_id = require_user(&headers)?;

    match create_event_type(state.repo.as_ref(), &user_id, payload).await {
        Ok(EventTypeOutcome::Saved(record)) => {
            Ok((StatusCode::OK, Json(SubmissionOutcome::Success { record })))
        }
        Ok(EventTypeOutcome::Invalid(field_errors)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubmissionOutcome::Error { field_errors }),
        )),
        Err(err) => Err(map_error(err)),
    }
}

/// Handler to list the current user's event types, newest first.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/event-types",
    responses(
        (status = 200, description = "Event types, ordered by creation time descending", body = EventTypeListResponse),
        (status = 404, description = "Session could not be resolved"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Event Types"
))]
pub async fn list_event_types_handler(
    State(state): State<Arc<EventTypesState>>,
    headers: HeaderMap,
) -> Result<Json<EventTypeListResponse>, (StatusCode, String)> {
    let user_id = require_user(&headers)?;

    let event_types = list_event_types(state.repo.as_ref(), &user_id)
        .await
        .map_err(map_error)?;

    Ok(Json(EventTypeListResponse { event_types }))
}

/// Handler backing the optimistic active/inactive switch.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/event-types/{id}/active",
    request_body = SetActiveRequest,
    responses(
        (status = 200, description = "Active flag updated", body = MutationAck),
        (status = 404, description = "Event type or session not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Event Types"
))]
pub async fn set_active_handler(
    State(state): State<Arc<EventTypesState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<SetActiveRequest>,
) -> Result<Json<MutationAck>, (StatusCode, String)> {
    let user_id = require_user(&headers)?;

    set_event_type_active(state.repo.as_ref(), &user_id, &id, payload.active)
        .await
        .map_err(map_error)?;

    Ok(Json(MutationAck {
        success: true,
        message: "Event type updated.".to_string(),
    }))
}

/// Handler to replace the editable fields of an event type (edit flow).
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/event-types/{id}",
    request_body = EventTypeFormRequest,
    responses(
        (status = 200, description = "Event type updated"),
        (status = 404, description = "Event type or session not found"),
        (status = 422, description = "Validation failed; field errors returned"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Event Types"
))]
pub async fn update_event_type_handler(
    State(state): State<Arc<EventTypesState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<EventTypeFormRequest>,
) -> Result<(StatusCode, Json<SubmissionOutcome<EventType>>), (StatusCode, String)> {
    let user_id = require_user(&headers)?;

    match update_event_type(state.repo.as_ref(), &user_id, &id, payload).await {
        Ok(EventTypeOutcome::Saved(record)) => {
            Ok((StatusCode::OK, Json(SubmissionOutcome::Success { record })))
        }
        Ok(EventTypeOutcome::Invalid(field_errors)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubmissionOutcome::Error { field_errors }),
        )),
        Err(err) => Err(map_error(err)),
    }
}

/// Handler to delete an event type, reached from the confirmation view.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/event-types/{id}",
    responses(
        (status = 200, description = "Event type deleted", body = MutationAck),
        (status = 404, description = "Event type or session not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Event Types"
))]
pub async fn delete_event_type_handler(
    State(state): State<Arc<EventTypesState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<MutationAck>, (StatusCode, String)> {
    let user_id = require_user(&headers)?;

    delete_event_type(state.repo.as_ref(), &user_id, &id)
        .await
        .map_err(map_error)?;

    Ok(Json(MutationAck {
        success: true,
        message: "Event type deleted.".to_string(),
    }))
}
