//! Model provider (OpenAI-compatible API) configuration.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default chat completions endpoint.
fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

/// Default model.
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Default sampling temperature.
const fn default_temperature() -> f32 {
    0.7
}

/// Default per-request timeout, in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// API key for the hosted model (bearer token).
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// How long a single completion call may take before the controller
    /// gives up, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    /// Check if the provider has the minimum required fields for live calls.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Error unless the provider is configured. Commands that talk to the
    /// model call this up front so the failure names the missing section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when `api_key` is empty.
    pub fn require_configured(&self) -> Result<(), ConfigError> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: "provider".to_string(),
            })
        }
    }

    /// The request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
