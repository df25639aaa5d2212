//! # Storage Error Types
//!
//! Error types for local-storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error) ──┐                                        │
//! │  serde_json (encode side) ────┼──► DbError (this module)               │
//! │  CoreError / ValidationError ─┘         │                               │
//! │                                         ▼                               │
//! │                                   caller / view                         │
//! │                                                                         │
//! │  NOT an error: a stored blob that fails to PARSE. That is logged at    │
//! │  warn level and read back as an empty collection.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anchor_core::{CoreError, ValidationError};
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Record not found in its collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Merged record failed validation; nothing was written.
    #[error("Invalid {entity}: {source}")]
    Invalid {
        entity: String,
        #[source]
        source: ValidationError,
    },

    /// Business rule violation from anchor-core.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// A record could not be encoded to, or rebuilt from, JSON.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates an Invalid error for a record that failed validation.
    pub fn invalid(entity: impl Into<String>, source: ValidationError) -> Self {
        DbError::Invalid {
            entity: entity.into(),
            source,
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;
