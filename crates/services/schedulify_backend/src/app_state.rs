// --- File: crates/services/schedulify_backend/src/app_state.rs ---
use crate::service_factory::SchedulifyServiceFactory;
use schedulify_common::services::ServiceFactory;
use schedulify_config::AppConfig;
use schedulify_db::{DbClient, DbError, EventTypeRepository, SqlEventTypeRepository, SqlUserRepository, UserRepository};
use std::sync::Arc;
use tracing::info;

/// Application state that is shared across all routes.
///
/// Follows the dependency injection pattern: configuration, the service
/// factory and the database client are created once at startup and handed
/// to each feature router, which builds its own handler state from them.
#[derive(Clone)]
pub struct AppState {
    /// The application configuration.
    pub config: Arc<AppConfig>,

    /// Service factory for accessing external collaborator services.
    pub service_factory: Arc<dyn ServiceFactory>,

    /// Shared database client.
    pub db_client: DbClient,
}

impl AppState {
    /// Create a new AppState with the given configuration.
    ///
    /// Connects the database, runs schema initialization for the
    /// repositories and wires the service factory.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, DbError> {
        let db_client = DbClient::new(&config).await?;

        // Repositories own their DDL; initialize both up front.
        SqlUserRepository::new(db_client.clone()).init_schema().await?;
        SqlEventTypeRepository::new(db_client.clone())
            .init_schema()
            .await?;

        let service_factory = Arc::new(SchedulifyServiceFactory::new(config.clone()));

        info!("Application state initialized");
        Ok(Self {
            config,
            service_factory,
            db_client,
        })
    }
}
