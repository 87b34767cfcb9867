// --- File: crates/schedulify_event_types/src/logic.rs ---

use schedulify_common::models::{EventType, MeetingDuration, VideoCallSoftware};
use schedulify_db::{DbError, EventTypeRepository};
use schedulify_forms::{event_type_schema, FieldErrors, FormInput, FormValues};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum EventTypeError {
    #[error("Event type not found.")]
    NotFound,
    #[error("Database interaction failed: {0}")]
    DatabaseError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DbError> for EventTypeError {
    fn from(err: DbError) -> Self {
        EventTypeError::DatabaseError(err.to_string())
    }
}

/// The event-creation form's payload, exactly as the form submits it:
/// every field is a string and coercion happens in the validation pass.
#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EventTypeFormRequest {
    #[cfg_attr(feature = "openapi", schema(example = "30 min meeting"))]
    pub title: String,
    #[cfg_attr(feature = "openapi", schema(example = "intro-call"))]
    pub url: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = ""))]
    pub description: String,
    #[cfg_attr(feature = "openapi", schema(example = "30"))]
    pub duration: String,
    #[cfg_attr(feature = "openapi", schema(example = "Google Meet"))]
    pub video_call_software: String,
}

impl EventTypeFormRequest {
    /// Flatten into the engine's input shape.
    pub fn into_form_input(self) -> FormInput {
        FormInput::from([
            ("title".to_string(), self.title),
            ("url".to_string(), self.url),
            ("description".to_string(), self.description),
            ("duration".to_string(), self.duration),
            ("video_call_software".to_string(), self.video_call_software),
        ])
    }
}

/// Body for the active/inactive switch mutation.
#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SetActiveRequest {
    #[cfg_attr(feature = "openapi", schema(example = false))]
    pub active: bool,
}

/// Acknowledgement for fire-and-forget style mutations.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MutationAck {
    pub success: bool,
    pub message: String,
}

/// How a validated create/update ended: a persisted record, or the field
/// errors to redisplay. Field errors are non-fatal; the form stays up.
#[derive(Debug)]
pub enum EventTypeOutcome {
    Saved(EventType),
    Invalid(FieldErrors),
}

fn slug_taken_errors() -> FieldErrors {
    FieldErrors::from([(
        "url".to_string(),
        vec!["This URL slug is already in use".to_string()],
    )])
}

fn record_from_values(
    id: String,
    user_id: &str,
    values: &FormValues,
) -> Result<EventType, EventTypeError> {
    let duration_minutes = values
        .integer("duration")
        .ok_or_else(|| EventTypeError::InternalError("validated duration missing".to_string()))?;
    let duration = MeetingDuration::try_from(duration_minutes)
        .map_err(EventTypeError::InternalError)?;

    let video_call_software = values
        .text("video_call_software")
        .parse::<VideoCallSoftware>()
        .map_err(EventTypeError::InternalError)?;

    let description = match values.text("description") {
        "" => None,
        text => Some(text.to_string()),
    };

    Ok(EventType::new(
        id,
        user_id.to_string(),
        values.text("title").to_string(),
        values.text("url").to_string(),
        description,
        duration,
        video_call_software,
    ))
}

/// Create a new event type from a submitted form.
///
/// Runs the authoritative validation pass with the same schema the client
/// used, then persists. New records are active by default. A slug taken
/// inside the user's namespace comes back as a `url` field error so the
/// form can redisplay it inline.
pub async fn create_event_type(
    repo: &impl EventTypeRepository,
    user_id: &str,
    request: EventTypeFormRequest,
) -> Result<EventTypeOutcome, EventTypeError> {
    let input = request.into_form_input();
    let values = match event_type_schema().validate(&input) {
        Ok(values) => values,
        Err(field_errors) => return Ok(EventTypeOutcome::Invalid(field_errors)),
    };

    let record = record_from_values(uuid::Uuid::new_v4().to_string(), user_id, &values)?;

    match repo.insert(record).await {
        Ok(saved) => {
            info!("Created event type {} for user {}", saved.id, user_id);
            Ok(EventTypeOutcome::Saved(saved))
        }
        Err(DbError::Conflict(_)) => Ok(EventTypeOutcome::Invalid(slug_taken_errors())),
        Err(err) => Err(err.into()),
    }
}

/// Replace the editable fields of an existing event type.
///
/// The record's identity, active flag and creation time are untouched.
pub async fn update_event_type(
    repo: &impl EventTypeRepository,
    user_id: &str,
    id: &str,
    request: EventTypeFormRequest,
) -> Result<EventTypeOutcome, EventTypeError> {
    let input = request.into_form_input();
    let values = match event_type_schema().validate(&input) {
        Ok(values) => values,
        Err(field_errors) => return Ok(EventTypeOutcome::Invalid(field_errors)),
    };

    let mut record = repo
        .find_by_id(user_id, id)
        .await?
        .ok_or(EventTypeError::NotFound)?;

    let replacement = record_from_values(record.id.clone(), user_id, &values)?;
    record.title = replacement.title;
    record.url = replacement.url;
    record.description = replacement.description;
    record.duration = replacement.duration;
    record.video_call_software = replacement.video_call_software;

    match repo.update(record).await {
        Ok(Some(saved)) => Ok(EventTypeOutcome::Saved(saved)),
        Ok(None) => Err(EventTypeError::NotFound),
        Err(DbError::Conflict(_)) => Ok(EventTypeOutcome::Invalid(slug_taken_errors())),
        Err(err) => Err(err.into()),
    }
}

/// Set the active flag of one event type.
///
/// This backs the dashboard's optimistic switch: the caller has already
/// flipped its local value and only needs an ack, or a failure to roll
/// back on. Safe to retry; the end state is the requested flag.
pub async fn set_event_type_active(
    repo: &impl EventTypeRepository,
    user_id: &str,
    id: &str,
    active: bool,
) -> Result<(), EventTypeError> {
    let updated = repo.set_active(user_id, id, active).await?;
    if !updated {
        return Err(EventTypeError::NotFound);
    }
    info!("Event type {} set active={} for user {}", id, active, user_id);
    Ok(())
}

/// Delete one event type. Reached only through the confirmation view;
/// the dashboard list itself never calls this directly.
pub async fn delete_event_type(
    repo: &impl EventTypeRepository,
    user_id: &str,
    id: &str,
) -> Result<(), EventTypeError> {
    let deleted = repo.delete(user_id, id).await?;
    if !deleted {
        return Err(EventTypeError::NotFound);
    }
    info!("Deleted event type {} for user {}", id, user_id);
    Ok(())
}

/// All of a user's event types, newest first.
pub async fn list_event_types(
    repo: &impl EventTypeRepository,
    user_id: &str,
) -> Result<Vec<EventType>, EventTypeError> {
    Ok(repo.list_by_user(user_id).await?)
}

/// Where the dashboard navigates to before a delete is confirmed.
/// Deletion is a two-step flow, never a single click from the list.
pub fn delete_confirmation_path(id: &str) -> String {
    format!("/dashboard/event/{}/delete", id)
}
