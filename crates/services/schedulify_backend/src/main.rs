// File: services/schedulify_backend/src/main.rs
mod app_state;
mod service_factory;

use app_state::AppState;
use axum::{routing::get, Router};
use schedulify_config::load_config;
use schedulify_dashboard::routes as dashboard_routes;
use schedulify_event_types::routes as event_type_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    schedulify_common::logging::init();

    let state = AppState::new(config.clone())
        .await
        .expect("Failed to initialize application state");

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Schedulify API!" }))
        .merge(schedulify_common::routes())
        .merge(event_type_routes(
            config.clone(),
            state.db_client.clone(),
        ))
        .merge(dashboard_routes(
            config.clone(),
            state.db_client.clone(),
            state.service_factory.clone(),
        ));

    #[allow(unused_mut)]
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use schedulify_dashboard::doc::DashboardApiDoc;
        use schedulify_event_types::doc::EventTypesApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Schedulify API",
                version = "0.1.0",
                description = "Schedulify Service API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Schedulify", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        // Create the merged OpenAPI document
        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(EventTypesApiDoc::openapi());
        openapi_doc.merge(DashboardApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        // Create the Swagger UI route, referencing the merged doc
        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        // Merge the Swagger UI into the main app router
        app = app.merge(swagger_ui);
    }

    // Serve static files in dev mode
    if cfg!(debug_assertions) {
        println!("Running in development mode, serving static files from ../../dist");

        // Serve static files at a specific path
        let static_router = Router::new().nest_service("/static", ServeDir::new("../../dist"));
        app = app.merge(static_router);

        // You can also keep the fallback service for non-matched routes
        app = app.fallback_service(ServeDir::new("../dist"));
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
