//! Cross-cutting error types for Estudia.
//!
//! Domain-specific errors (`DatabaseError`, `ProviderError`, `ChatError`)
//! live in their respective crates. Lookup misses are never errors anywhere
//! in the system: every lookup returns `Option<T>` and callers branch on
//! presence.

use thiserror::Error;

/// Errors that can be raised by any Estudia crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation. The message is user-facing (Spanish).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
