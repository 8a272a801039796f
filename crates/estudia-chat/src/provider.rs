//! Model-provider abstraction.
//!
//! The controller only ever needs one operation: hand the provider an ordered
//! context and get a completion back. Everything else (endpoints, auth,
//! retries) is the provider's business.

use async_trait::async_trait;
use thiserror::Error;

/// Role of one turn in the outbound context.
///
/// Distinct from `estudia_core::enums::MessageRole`: the context carries a
/// system preamble that is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    System,
    User,
    Assistant,
}

/// One turn of outbound context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// Provider errors. The controller treats all of them uniformly as
/// "provider unavailable"; the distinctions exist for logging.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A chat-completion backend.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Short identifier for logs ("openai", "stub", ...).
    fn name(&self) -> &str;

    /// Produce a completion for the given ordered context.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on transport failures, non-success API
    /// responses, or malformed response bodies.
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, ProviderError>;
}
