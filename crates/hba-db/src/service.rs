//! Service layer owning the database handle.
//!
//! `TrackerService` wraps [`HbaDb`] and hosts all repository methods as
//! `impl TrackerService` blocks (see [`crate::repos`]). Callers pass the
//! service explicitly into each operation; there is no module-level
//! connection singleton.

use crate::HbaDb;
use crate::error::DatabaseError;

/// Owns the single database connection for the life of the process.
pub struct TrackerService {
    db: HbaDb,
}

impl TrackerService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"`
    ///   for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = HbaDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `HbaDb` (for testing).
    #[must_use]
    pub const fn from_db(db: HbaDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &HbaDb {
        &self.db
    }
}
