//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables.

pub mod cart;
pub mod menu;
pub mod payment;
pub mod review;
pub mod user;

// Re-exports
pub use cart::CartRepository;
pub use menu::MenuRepository;
pub use payment::PaymentRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::sql::Thing;
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}

/// Build a record id, tolerating an already prefixed "table:id" input
pub fn make_thing(table: &str, id: &str) -> Thing {
    match id.split_once(':') {
        Some((tb, key)) if tb == table => Thing::from((tb.to_string(), key.to_string())),
        _ => Thing::from((table.to_string(), id.to_string())),
    }
}

/// Extract the bare id from a possibly prefixed "table:id" string
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}
