//! General application configuration.

use crate::ConfigError;
use estudia_core::enums::StudyMode;
use serde::{Deserialize, Serialize};

/// Default study mode for new sessions.
fn default_mode() -> String {
    StudyMode::FreeChat.as_str().to_string()
}

/// Default number of messages shown by history commands.
const fn default_history_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Mode used when a command doesn't name one (`free_chat`,
    /// `guided_study`, `assessment`, `timed_simulation`,
    /// `analytics_dashboard`).
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// Default message limit for history output.
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            history_limit: default_history_limit(),
        }
    }
}

impl GeneralConfig {
    /// Parse `default_mode` into a [`StudyMode`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the string names no known mode.
    pub fn study_mode(&self) -> Result<StudyMode, ConfigError> {
        StudyMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == self.default_mode)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "general.default_mode".to_string(),
                reason: format!("unknown mode '{}'", self.default_mode),
            })
    }
}
