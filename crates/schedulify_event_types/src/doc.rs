// --- File: crates/schedulify_event_types/src/doc.rs ---
#![allow(dead_code)]
use utoipa::OpenApi;

use crate::handlers::EventTypeListResponse;
use crate::logic::{EventTypeFormRequest, MutationAck, SetActiveRequest};
use schedulify_common::models::{EventType, MeetingDuration, User, VideoCallSoftware};

/// OpenAPI documentation for the Event Types API
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::create_event_type_handler,
        crate::handlers::list_event_types_handler,
        crate::handlers::set_active_handler,
        crate::handlers::update_event_type_handler,
        crate::handlers::delete_event_type_handler,
    ),
    components(
        schemas(
            EventType,
            EventTypeFormRequest,
            EventTypeListResponse,
            MeetingDuration,
            MutationAck,
            SetActiveRequest,
            User,
            VideoCallSoftware,
        )
    ),
    tags(
        (name = "Event Types", description = "API for configuring bookable meeting templates")
    )
)]
pub struct EventTypesApiDoc;
