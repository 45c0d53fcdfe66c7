//! Database error types for lab-db.

use lab_core::codec::CodecError;
use lab_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be read back.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The write was rejected before reaching the database.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Questions or answers could not be encoded for storage.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    /// Whether this is a lookup miss rather than a real failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NoResult | Self::Core(CoreError::NotFound { .. })
        )
    }
}
