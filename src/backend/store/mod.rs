//! Store Module
//!
//! Persistence seams used by handlers. Each store is a trait with two
//! implementations:
//!
//! - Postgres via `sqlx` (`auth::users::PgUserStore`, `snippets::db::PgSnippetStore`)
//! - In-memory (`store::memory::MemoryStore`), used by tests and when
//!   `DATABASE_URL` is not set

use thiserror::Error;

/// In-memory store implementation
pub mod memory;

pub use memory::MemoryStore;

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint was violated
    #[error("unique constraint violated on {0}")]
    Conflict(&'static str),

    /// A row references a user that does not exist
    #[error("no user with id {0}")]
    UnknownUser(i64),

    /// The underlying database failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other backend failure
    #[error("store error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Map a sqlx error, turning unique violations into `Conflict`
    pub fn from_sqlx(err: sqlx::Error, unique_field: &'static str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Conflict(unique_field);
            }
        }
        Self::Database(err)
    }

    /// Map a sqlx error from a write owned by `user_id`, turning a foreign
    /// key violation into `UnknownUser`
    pub fn from_owned_write(err: sqlx::Error, user_id: i64) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return Self::UnknownUser(user_id);
            }
        }
        Self::Database(err)
    }
}
