// --- File: crates/schedulify_dashboard/src/doc.rs ---
#![allow(dead_code)]
use utoipa::OpenApi;

use crate::handlers::{DashboardResponse, SettingsView};
use crate::list::{DashboardView, EventTypeListItem};
use crate::profile::SettingsFormRequest;
use schedulify_common::services::UploadedImage;

/// OpenAPI documentation for the Dashboard API
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_dashboard_handler,
        crate::handlers::get_settings_handler,
        crate::handlers::submit_settings_handler,
        crate::handlers::upload_avatar_handler,
    ),
    components(
        schemas(
            DashboardResponse,
            DashboardView,
            EventTypeListItem,
            SettingsFormRequest,
            SettingsView,
            UploadedImage,
        )
    ),
    tags(
        (name = "Dashboard", description = "API for the event-type dashboard and profile settings")
    )
)]
pub struct DashboardApiDoc;
