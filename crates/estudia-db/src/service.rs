//! Service layer exposing all store operations.
//!
//! `EstudiaService` wraps `EstudiaDb` (raw database access). All repo methods
//! are implemented as `impl EstudiaService` blocks under [`crate::repos`],
//! split by entity: users, sessions, messages, and analytics.

use crate::EstudiaDb;
use crate::error::DatabaseError;

/// Orchestrates all reads and writes against the Estudia store.
///
/// One instance per process; repo methods borrow the inner connection, so
/// the service is cheap to share behind an `Arc` when needed.
pub struct EstudiaService {
    db: EstudiaDb,
}

impl EstudiaService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = EstudiaDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `EstudiaDb` (for testing).
    #[must_use]
    pub const fn from_db(db: EstudiaDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &EstudiaDb {
        &self.db
    }
}
