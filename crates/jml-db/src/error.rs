//! Database error types for jml-db.

use jml_core::ids::ItemId;
use jml_tracker::StoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A version-guarded update found a newer version.
    #[error("Version conflict on {table} {id}: expected version {expected}")]
    Conflict {
        table: &'static str,
        id: ItemId,
        expected: i64,
    },

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Convert to the tracker's store error, naming the entity that was addressed.
    #[must_use]
    pub fn into_store_error(self, entity: &'static str, id: ItemId) -> StoreError {
        match self {
            Self::NoResult => StoreError::NotFound { entity, id },
            Self::Conflict { id, expected, .. } => StoreError::Conflict { id, expected },
            other => StoreError::Backend(other.to_string()),
        }
    }
}
