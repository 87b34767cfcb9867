//! Repository for event types
//!
//! This module provides the interface for storing and retrieving event
//! types, plus its SQL implementation. Timestamps travel as RFC 3339 text
//! because `DateTime<Utc>` does not decode through `sqlx::Any`.

use crate::error::DbError;
use crate::DbClient;
use chrono::{DateTime, Utc};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

// Re-export the shared model for convenience
pub use schedulify_common::models::{EventType, MeetingDuration, VideoCallSoftware};

/// Repository for event types
///
/// This trait defines the persistence interface the dashboard's event-type
/// operations run against.
pub trait EventTypeRepository: Send + Sync {
    /// Initialize the database schema for event types.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Persist a new event type.
    ///
    /// A slug collision within the owner's namespace surfaces as
    /// [`DbError::Conflict`].
    fn insert(
        &self,
        event_type: EventType,
    ) -> impl std::future::Future<Output = Result<EventType, DbError>> + Send;

    /// Find one event type by owner and id.
    fn find_by_id(
        &self,
        user_id: &str,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<EventType>, DbError>> + Send;

    /// All event types for a user, ordered by creation time descending.
    fn list_by_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<EventType>, DbError>> + Send;

    /// Set the active flag on one event type.
    ///
    /// Returns `false` when no matching record exists for the owner.
    fn set_active(
        &self,
        user_id: &str,
        id: &str,
        active: bool,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// Replace the editable fields of one event type.
    ///
    /// Returns the updated record, or `None` when it does not exist.
    fn update(
        &self,
        event_type: EventType,
    ) -> impl std::future::Future<Output = Result<Option<EventType>, DbError>> + Send;

    /// Delete one event type.
    ///
    /// Returns `true` if a record was deleted, `false` if none was found.
    fn delete(
        &self,
        user_id: &str,
        id: &str,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;
}

/// SQL implementation of the event type repository
#[derive(Debug, Clone)]
pub struct SqlEventTypeRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlEventTypeRepository {
    /// Create a new SQL event type repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn map_row(row: &AnyRow) -> Result<EventType, DbError> {
    let duration_minutes: i64 = row
        .try_get("duration")
        .map_err(|e| DbError::RowError(e.to_string()))?;
    let duration = MeetingDuration::try_from(duration_minutes).map_err(DbError::RowError)?;

    let platform: String = row
        .try_get("video_call_software")
        .map_err(|e| DbError::RowError(e.to_string()))?;
    let video_call_software = platform
        .parse::<VideoCallSoftware>()
        .map_err(DbError::RowError)?;

    let created_at_text: String = row
        .try_get("created_at")
        .map_err(|e| DbError::RowError(e.to_string()))?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_text)
        .map_err(|e| DbError::RowError(format!("invalid created_at: {}", e)))?
        .with_timezone(&Utc);

    let active: i64 = row
        .try_get("active")
        .map_err(|e| DbError::RowError(e.to_string()))?;

    let description: Option<String> = row.try_get("description").ok().filter(|d: &String| !d.is_empty());

    Ok(EventType {
        id: row
            .try_get("id")
            .map_err(|e| DbError::RowError(e.to_string()))?,
        user_id: row
            .try_get("user_id")
            .map_err(|e| DbError::RowError(e.to_string()))?,
        title: row
            .try_get("title")
            .map_err(|e| DbError::RowError(e.to_string()))?,
        url: row
            .try_get("url")
            .map_err(|e| DbError::RowError(e.to_string()))?,
        description,
        duration,
        video_call_software,
        active: active != 0,
        created_at,
    })
}

impl EventTypeRepository for SqlEventTypeRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing event type schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS event_types (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                title TEXT NOT NULL,
                url TEXT NOT NULL,
                description TEXT,
                duration INTEGER NOT NULL,
                video_call_software TEXT NOT NULL,
                active INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL,
                UNIQUE(user_id, url)
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Event type schema initialized successfully");
        Ok(())
    }

    async fn insert(&self, event_type: EventType) -> Result<EventType, DbError> {
        debug!(
            "Inserting event type {:?} for user: {}",
            event_type.url, event_type.user_id
        );

        let query = r#"
            INSERT INTO event_types
                (id, user_id, title, url, description, duration, video_call_software, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#;

        sqlx::query(query)
            .bind(&event_type.id)
            .bind(&event_type.user_id)
            .bind(&event_type.title)
            .bind(&event_type.url)
            .bind(event_type.description.clone().unwrap_or_default())
            .bind(event_type.duration.minutes())
            .bind(event_type.video_call_software.as_str())
            .bind(if event_type.active { 1i64 } else { 0i64 })
            .bind(event_type.created_at.to_rfc3339())
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert event type: {}", e);
                DbError::from_query(e)
            })?;

        info!("Event type created successfully: {}", event_type.id);
        Ok(event_type)
    }

    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<EventType>, DbError> {
        let query = r#"
            SELECT id, user_id, title, url, description, duration,
                   video_call_software, active, created_at
            FROM event_types
            WHERE user_id = $1 AND id = $2
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find event type: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(map_row).transpose()
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<EventType>, DbError> {
        debug!("Listing event types for user: {}", user_id);

        let query = r#"
            SELECT id, user_id, title, url, description, duration,
                   video_call_software, active, created_at
            FROM event_types
            WHERE user_id = $1
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list event types: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(map_row).collect()
    }

    async fn set_active(&self, user_id: &str, id: &str, active: bool) -> Result<bool, DbError> {
        debug!(
            "Setting event type {} active={} for user: {}",
            id, active, user_id
        );

        let query = r#"
            UPDATE event_types
            SET active = $1
            WHERE user_id = $2 AND id = $3
        "#;

        let result = sqlx::query(query)
            .bind(if active { 1i64 } else { 0i64 })
            .bind(user_id)
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to set event type active flag: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn update(&self, event_type: EventType) -> Result<Option<EventType>, DbError> {
        debug!(
            "Updating event type {} for user: {}",
            event_type.id, event_type.user_id
        );

        let query = r#"
            UPDATE event_types
            SET title = $1, url = $2, description = $3, duration = $4,
                video_call_software = $5
            WHERE user_id = $6 AND id = $7
        "#;

        let result = sqlx::query(query)
            .bind(&event_type.title)
            .bind(&event_type.url)
            .bind(event_type.description.clone().unwrap_or_default())
            .bind(event_type.duration.minutes())
            .bind(event_type.video_call_software.as_str())
            .bind(&event_type.user_id)
            .bind(&event_type.id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update event type: {}", e);
                DbError::from_query(e)
            })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(&event_type.user_id, &event_type.id).await
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<bool, DbError> {
        debug!("Deleting event type {} for user: {}", id, user_id);

        let query = r#"
            DELETE FROM event_types
            WHERE user_id = $1 AND id = $2
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete event type: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
