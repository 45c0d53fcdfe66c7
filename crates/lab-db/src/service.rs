//! Service layer over the database handle.
//!
//! `LabService` wraps `LabDb`. All repo methods are implemented as
//! `impl LabService` blocks under [`crate::repos`].

use crate::LabDb;
use crate::error::DatabaseError;

/// Entry point for every protolab read and write.
pub struct LabService {
    db: LabDb,
}

impl LabService {
    /// Open (and migrate) a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = LabDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `LabDb`.
    #[must_use]
    pub const fn from_db(db: LabDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LabDb {
        &self.db
    }
}
