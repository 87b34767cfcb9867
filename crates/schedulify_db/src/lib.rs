//! Database integration for Schedulify
//!
//! This crate provides the persistence collaborator behind the dashboard:
//! a database-agnostic client built on SQLx plus repositories for users
//! and event types. Handlers and logic only ever see the repository
//! traits, so tests can substitute in-memory fakes.

pub mod client;
pub mod error;
pub mod repositories;

pub use client::DbClient;
pub use error::DbError;
pub use repositories::event_type::{EventTypeRepository, SqlEventTypeRepository};
pub use repositories::user::{SqlUserRepository, UserRepository};
