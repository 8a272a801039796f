//! # estudia-config
//!
//! Layered configuration loading for Estudia using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ESTUDIA_*` prefix, `__` as separator)
//! 2. `OPENAI_API_KEY` (compatibility alias for `provider.api_key`)
//! 3. Project-level `.estudia/config.toml`
//! 4. User-level `~/.config/estudia/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ESTUDIA_PROVIDER__API_KEY` -> `provider.api_key`,
//! `ESTUDIA_DATABASE__PATH` -> `database.path`, etc. The `__` (double
//! underscore) separates nested config sections. `.env` files have always
//! carried a bare `OPENAI_API_KEY`, so that name keeps working too.
//!
//! # Usage
//!
//! ```no_run
//! use estudia_config::EstudiaConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = EstudiaConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = EstudiaConfig::load().expect("config");
//!
//! if config.provider.is_configured() {
//!     println!("Model: {}", config.provider.model);
//! }
//! ```

mod database;
mod error;
mod general;
mod provider;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use provider::ProviderConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EstudiaConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl EstudiaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`ESTUDIA_*` prefix)
    /// 2. `OPENAI_API_KEY` alias
    /// 3. `.estudia/config.toml` (project-local)
    /// 4. `~/.config/estudia/config.toml` (user-global)
    /// 5. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".estudia/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: OPENAI_API_KEY alias (the name .env files already use)
        figment = figment.merge(
            Env::raw()
                .only(&["OPENAI_API_KEY"])
                .map(|_| "provider__api_key".into())
                .split("__"),
        );

        // Layer 4: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("ESTUDIA_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("estudia").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        // In tests/build: CARGO_MANIFEST_DIR points to the crate dir.
        // Walk up to find workspace root's .env.
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}
