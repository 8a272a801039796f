//! Local libSQL database configuration.

use serde::{Deserialize, Serialize};

/// Default database file, matching the name the app has always used.
fn default_path() -> String {
    "chat_history.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file. `:memory:` opens a throwaway
    /// in-memory database.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the configured database is in-memory (nothing persists).
    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "chat_history.db");
        assert!(!config.is_memory());
    }

    #[test]
    fn memory_path_detection() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
        };
        assert!(config.is_memory());
    }
}
