//! Message repository.
//!
//! Append-only transcript storage. Message content is immutable once written;
//! rows disappear only through session cascade delete.

use chrono::Utc;

use estudia_core::entities::Message;
use estudia_core::enums::MessageRole;
use estudia_core::ids::PREFIX_MESSAGE;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::EstudiaService;

impl EstudiaService {
    /// Append a message and bump the owning session's `last_used_at` to the
    /// message timestamp, in one transaction.
    ///
    /// The co-update is a store invariant: a message written without the bump
    /// (or vice versa) must never be observable.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the transaction fails (including an unknown
    /// `session_id`, rejected by the foreign key). Nothing is written in that
    /// case.
    pub async fn append_message(
        &self,
        session_id: &str,
        role: MessageRole,
        content: &str,
    ) -> Result<Message, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_MESSAGE).await?;

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            "INSERT INTO messages (id, session_id, role, content, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            libsql::params![
                id.as_str(),
                session_id,
                role.as_str(),
                content,
                now.to_rfc3339()
            ],
        )
        .await?;
        tx.execute(
            "UPDATE sessions SET last_used_at = ?1 WHERE id = ?2",
            libsql::params![now.to_rfc3339(), session_id],
        )
        .await?;
        tx.commit().await?;

        Ok(Message {
            id,
            session_id: session_id.to_string(),
            role,
            content: content.to_string(),
            timestamp: now,
        })
    }

    /// List a session's messages in conversation order (timestamp ascending,
    /// insertion order breaking ties).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_messages(&self, session_id: &str) -> Result<Vec<Message>, DatabaseError> {
        let mut messages = Vec::new();
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, session_id, role, content, timestamp
                 FROM messages WHERE session_id = ?1
                 ORDER BY timestamp ASC, rowid ASC",
                [session_id],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            messages.push(row_to_message(&row)?);
        }
        Ok(messages)
    }

    /// Count messages in a session.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn message_count(&self, session_id: &str) -> Result<i64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COUNT(*) FROM messages WHERE session_id = ?1",
                [session_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }
}

/// Convert a libSQL row to a `Message` struct. Shared with the analytics
/// repo, which reads message rows through a JOIN.
pub(crate) fn row_to_message(row: &libsql::Row) -> Result<Message, DatabaseError> {
    Ok(Message {
        id: row.get::<String>(0)?,
        session_id: row.get::<String>(1)?,
        role: parse_enum(&row.get::<String>(2)?)?,
        content: row.get::<String>(3)?,
        timestamp: parse_datetime(&row.get::<String>(4)?)?,
    })
}
