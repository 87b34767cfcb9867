//! Error types for the database client

use thiserror::Error;

/// Errors that can occur when working with the database client
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// A uniqueness constraint was violated (e.g. a slug already taken)
    #[error("Database conflict: {0}")]
    Conflict(String),

    /// A stored row could not be mapped back onto its model
    #[error("Database row mapping error: {0}")]
    RowError(String),
}

impl DbError {
    /// Classify a query error, surfacing unique-constraint violations as
    /// [`DbError::Conflict`] so callers can map them to field errors.
    pub fn from_query(err: sqlx::Error) -> Self {
        let message = err.to_string();
        if message.contains("UNIQUE constraint failed")
            || message.contains("duplicate key value")
        {
            DbError::Conflict(message)
        } else {
            DbError::QueryError(message)
        }
    }
}
