//! Chat error types for estudia-chat.

use thiserror::Error;

/// Errors from conversation operations.
///
/// Provider failures are deliberately absent: the controller absorbs them
/// into [`crate::SendOutcome::Unavailable`] so a flaky provider can never
/// surface as a hard error or a partial transcript.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Empty or whitespace-only message. The provider is never invoked.
    #[error("El mensaje no puede estar vacío")]
    EmptyMessage,

    /// Underlying store failure.
    #[error(transparent)]
    Database(#[from] estudia_db::error::DatabaseError),
}
