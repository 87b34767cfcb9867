// --- File: crates/schedulify_event_types/src/routes.rs ---
use crate::handlers::{
    create_event_type_handler, delete_event_type_handler, list_event_types_handler,
    set_active_handler, update_event_type_handler, EventTypesState,
};
use axum::{
    routing::{patch, post, put},
    Router,
};
use schedulify_config::AppConfig;
use schedulify_db::{DbClient, SqlEventTypeRepository};
use std::sync::Arc;

/// Creates a router containing all routes for the event-type feature.
pub fn routes(config: Arc<AppConfig>, db_client: DbClient) -> Router {
    let state = Arc::new(EventTypesState {
        config,
        repo: Arc::new(SqlEventTypeRepository::new(db_client)),
    });

    Router::new()
        .route(
            "/event-types",
            post(create_event_type_handler).get(list_event_types_handler),
        )
        .route("/event-types/{id}/active", patch(set_active_handler))
        .route(
            "/event-types/{id}",
            put(update_event_type_handler).delete(delete_event_type_handler),
        )
        .with_state(state)
}
