// --- File: crates/schedulify_dashboard/src/routes.rs ---
use crate::handlers::{
    get_dashboard_handler, get_settings_handler, submit_settings_handler, upload_avatar_handler,
    DashboardState,
};
use axum::{
    routing::{get, post},
    Router,
};
use schedulify_common::services::ServiceFactory;
use schedulify_config::AppConfig;
use schedulify_db::{DbClient, SqlEventTypeRepository, SqlUserRepository};
use std::sync::Arc;

/// Creates a router containing all routes for the dashboard feature.
pub fn routes(
    config: Arc<AppConfig>,
    db_client: DbClient,
    service_factory: Arc<dyn ServiceFactory>,
) -> Router {
    let state = Arc::new(DashboardState {
        config,
        users: Arc::new(SqlUserRepository::new(db_client.clone())),
        event_types: Arc::new(SqlEventTypeRepository::new(db_client)),
        upload_service: service_factory.upload_service(),
    });

    Router::new()
        .route("/dashboard", get(get_dashboard_handler))
        .route(
            "/dashboard/settings",
            get(get_settings_handler).post(submit_settings_handler),
        )
        .route("/dashboard/settings/avatar", post(upload_avatar_handler))
        .with_state(state)
}
