//! Session repository.
//!
//! Session lifecycle: create, latest-session lookup (get-or-create), mode
//! filtering, rename, cascade delete, last-used bookkeeping.
//!
//! A session's mode is immutable after creation. Changing modes always means
//! creating a new session; there is deliberately no `set_mode` here.

use chrono::Utc;

use estudia_core::entities::{DEFAULT_SESSION_NAME, Session};
use estudia_core::enums::StudyMode;
use estudia_core::ids::PREFIX_SESSION;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::EstudiaService;

impl EstudiaService {
    /// Create a new session for a user in the given mode.
    ///
    /// `name` defaults to [`DEFAULT_SESSION_NAME`] when absent.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails (including an unknown
    /// `user_id`, rejected by the foreign key).
    pub async fn create_session(
        &self,
        user_id: &str,
        name: Option<&str>,
        mode: StudyMode,
    ) -> Result<Session, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_SESSION).await?;
        let name = name.unwrap_or(DEFAULT_SESSION_NAME);

        self.db()
            .conn()
            .execute(
                "INSERT INTO sessions (id, user_id, name, mode, created_at, last_used_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
                libsql::params![id.as_str(), user_id, name, mode.as_str(), now.to_rfc3339()],
            )
            .await?;

        Ok(Session {
            id,
            user_id: user_id.to_string(),
            name: name.to_string(),
            mode,
            created_at: now,
            last_used_at: now,
        })
    }

    /// Get a session by ID. Returns `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_session(&self, id: &str) -> Result<Option<Session>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, user_id, name, mode, created_at, last_used_at
                 FROM sessions WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_session(&row)?)),
            None => Ok(None),
        }
    }

    /// Get the most recently created session, creating a default one if the
    /// user has none yet.
    ///
    /// "Latest" means newest by `created_at`, not most recently used:
    /// revisiting an old session must not change which one a fresh
    /// conversation binds to. With a `mode` filter this is the "(user, mode)
    /// pair" lookup the conversation controller binds through; the
    /// auto-created session takes that mode (free chat when unfiltered).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the lookup or the fallback insert fails.
    pub async fn latest_session(
        &self,
        user_id: &str,
        mode: Option<StudyMode>,
    ) -> Result<Session, DatabaseError> {
        let mut rows = match mode {
            Some(m) => {
                self.db()
                    .conn()
                    .query(
                        "SELECT id, user_id, name, mode, created_at, last_used_at
                         FROM sessions WHERE user_id = ?1 AND mode = ?2
                         ORDER BY created_at DESC LIMIT 1",
                        libsql::params![user_id, m.as_str()],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        "SELECT id, user_id, name, mode, created_at, last_used_at
                         FROM sessions WHERE user_id = ?1
                         ORDER BY created_at DESC LIMIT 1",
                        [user_id],
                    )
                    .await?
            }
        };

        if let Some(row) = rows.next().await? {
            return row_to_session(&row);
        }
        self.create_session(user_id, None, mode.unwrap_or(StudyMode::FreeChat))
            .await
    }

    /// List a user's sessions, optionally filtered by mode, most recently
    /// used first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_sessions(
        &self,
        user_id: &str,
        mode: Option<StudyMode>,
    ) -> Result<Vec<Session>, DatabaseError> {
        let mut sessions = Vec::new();

        let mut rows = match mode {
            Some(m) => {
                self.db()
                    .conn()
                    .query(
                        "SELECT id, user_id, name, mode, created_at, last_used_at
                         FROM sessions WHERE user_id = ?1 AND mode = ?2
                         ORDER BY last_used_at DESC",
                        libsql::params![user_id, m.as_str()],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        "SELECT id, user_id, name, mode, created_at, last_used_at
                         FROM sessions WHERE user_id = ?1
                         ORDER BY last_used_at DESC",
                        [user_id],
                    )
                    .await?
            }
        };

        while let Some(row) = rows.next().await? {
            sessions.push(row_to_session(&row)?);
        }

        Ok(sessions)
    }

    /// Rename a session. Renaming never touches `last_used_at`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the update fails.
    pub async fn rename_session(
        &self,
        session_id: &str,
        new_name: &str,
    ) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "UPDATE sessions SET name = ?1 WHERE id = ?2",
                libsql::params![new_name, session_id],
            )
            .await?;
        Ok(())
    }

    /// Delete a session and, via `ON DELETE CASCADE`, all of its messages.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete fails.
    pub async fn delete_session(&self, session_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM sessions WHERE id = ?1", [session_id])
            .await?;
        Ok(())
    }
}

/// Convert a libSQL row to a `Session` struct.
fn row_to_session(row: &libsql::Row) -> Result<Session, DatabaseError> {
    Ok(Session {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        name: row.get::<String>(2)?,
        mode: parse_enum(&row.get::<String>(3)?)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        last_used_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}
