//! Repository for users
//!
//! Storage for the dashboard's user profiles. The settings form only ever
//! mutates `full_name` and `profile_image_url`; `username` and `email` are
//! written once at account creation and read-only afterwards.

use crate::error::DbError;
use crate::DbClient;
use chrono::{DateTime, Utc};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

// Re-export the shared model for convenience
pub use schedulify_common::models::User;

/// Repository for users
pub trait UserRepository: Send + Sync {
    /// Initialize the database schema for users.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Persist a new user.
    fn insert(&self, user: User) -> impl std::future::Future<Output = Result<User, DbError>> + Send;

    /// Find one user by id.
    fn find_by_id(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, DbError>> + Send;

    /// Update the profile fields the settings form owns.
    ///
    /// An empty `profile_image_url` clears the stored image. Returns the
    /// updated user, or `None` when the id does not exist.
    fn update_profile(
        &self,
        id: &str,
        full_name: &str,
        profile_image_url: Option<&str>,
    ) -> impl std::future::Future<Output = Result<Option<User>, DbError>> + Send;
}

/// SQL implementation of the user repository
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlUserRepository {
    /// Create a new SQL user repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn map_row(row: &AnyRow) -> Result<User, DbError> {
    let profile_image_url: Option<String> = row
        .try_get::<String, _>("profile_image_url")
        .ok()
        .filter(|url| !url.is_empty());

    let created_at = row
        .try_get::<String, _>("created_at")
        .ok()
        .and_then(|text| DateTime::parse_from_rfc3339(&text).ok())
        .map(|dt| dt.with_timezone(&Utc));

    Ok(User {
        id: row
            .try_get("id")
            .map_err(|e| DbError::RowError(e.to_string()))?,
        username: row
            .try_get("username")
            .map_err(|e| DbError::RowError(e.to_string()))?,
        full_name: row
            .try_get("full_name")
            .map_err(|e| DbError::RowError(e.to_string()))?,
        email: row
            .try_get("email")
            .map_err(|e| DbError::RowError(e.to_string()))?,
        profile_image_url,
        created_at,
    })
}

impl UserRepository for SqlUserRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing user schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                full_name TEXT NOT NULL,
                email TEXT NOT NULL,
                profile_image_url TEXT,
                created_at TEXT
            )
        "#;

        self.db_client.execute(query).await?;

        info!("User schema initialized successfully");
        Ok(())
    }

    async fn insert(&self, user: User) -> Result<User, DbError> {
        debug!("Inserting user: {}", user.username);

        let query = r#"
            INSERT INTO users (id, username, full_name, email, profile_image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        sqlx::query(query)
            .bind(&user.id)
            .bind(&user.username)
            .bind(&user.full_name)
            .bind(&user.email)
            .bind(user.profile_image_url.clone().unwrap_or_default())
            .bind(
                user.created_at
                    .map(|dt| dt.to_rfc3339())
                    .unwrap_or_default(),
            )
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert user: {}", e);
                DbError::from_query(e)
            })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DbError> {
        let query = r#"
            SELECT id, username, full_name, email, profile_image_url, created_at
            FROM users
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find user: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(map_row).transpose()
    }

    async fn update_profile(
        &self,
        id: &str,
        full_name: &str,
        profile_image_url: Option<&str>,
    ) -> Result<Option<User>, DbError> {
        debug!("Updating profile for user: {}", id);

        let query = r#"
            UPDATE users
            SET full_name = $1, profile_image_url = $2
            WHERE id = $3
        "#;

        let result = sqlx::query(query)
            .bind(full_name)
            .bind(profile_image_url.unwrap_or_default())
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update profile: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }
}
