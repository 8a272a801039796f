//! # estudia-chat
//!
//! Conversation controller for Estudia: binds a user and a study mode to a
//! live, appendable conversation, orchestrates the exchange with the model
//! provider, and guarantees the store never sees a partial transcript.
//!
//! The provider is behind the [`provider::ModelProvider`] trait; the shipped
//! implementation targets OpenAI-compatible chat-completion APIs.

pub mod conversation;
pub mod error;
pub mod openai;
pub mod prompts;
pub mod provider;

pub use conversation::{Conversation, PROVIDER_FAILURE_NOTICE, SendOutcome};
pub use error::ChatError;
pub use openai::OpenAiProvider;
pub use provider::{ChatTurn, ModelProvider, ProviderError, TurnRole};
