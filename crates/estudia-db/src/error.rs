//! Database error types for estudia-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A uniqueness rule was violated (duplicate username or email).
    ///
    /// The message is user-facing Spanish and can be shown verbatim.
    #[error("{0}")]
    Conflict(String),

    /// A SQL query failed.
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

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// True when the error is a uniqueness conflict, either detected by the
    /// pre-insert check or raised by a `UNIQUE` constraint.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        match self {
            Self::Conflict(_) => true,
            Self::LibSql(err) => err.to_string().contains("UNIQUE constraint failed"),
            _ => false,
        }
    }
}
