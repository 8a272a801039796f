//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use estudia_config::EstudiaConfig;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_provider_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[provider]
api_key = "sk-toml"
base_url = "http://localhost:4000/v1"
model = "gpt-4o"
temperature = 0.2
timeout_secs = 10
"#,
        )?;

        let config: EstudiaConfig = Figment::from(Serialized::defaults(EstudiaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.provider.api_key, "sk-toml");
        assert_eq!(config.provider.base_url, "http://localhost:4000/v1");
        assert_eq!(config.provider.model, "gpt-4o");
        assert!((config.provider.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.provider.timeout_secs, 10);
        assert!(config.provider.is_configured());
        Ok(())
    });
}

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "./data/estudia.db"
"#,
        )?;

        let config: EstudiaConfig = Figment::from(Serialized::defaults(EstudiaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "./data/estudia.db");
        assert!(!config.database.is_memory());
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_mode = "assessment"
history_limit = 100
"#,
        )?;

        let config: EstudiaConfig = Figment::from(Serialized::defaults(EstudiaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_mode, "assessment");
        assert_eq!(config.general.history_limit, 100);
        assert_eq!(
            config.general.study_mode().expect("mode parses"),
            estudia_core::enums::StudyMode::Assessment
        );
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = ":memory:"

[provider]
api_key = "sk-full"
model = "gpt-4.1-mini"

[general]
default_mode = "guided_study"
history_limit = 50
"#,
        )?;

        let config: EstudiaConfig = Figment::from(Serialized::defaults(EstudiaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.database.is_memory());
        assert!(config.provider.is_configured());
        assert_eq!(config.provider.model, "gpt-4.1-mini");
        // Unset provider fields keep their defaults
        assert_eq!(config.provider.base_url, "https://api.openai.com/v1");
        assert_eq!(config.general.default_mode, "guided_study");
        assert_eq!(config.general.history_limit, 50);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("ESTUDIA_PROVIDER__MODEL", "model-from-env");

        jail.create_file(
            "config.toml",
            r#"
[provider]
api_key = "sk-toml"
model = "model-from-toml"
"#,
        )?;

        let config: EstudiaConfig = Figment::from(Serialized::defaults(EstudiaConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("ESTUDIA_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.provider.model, "model-from-env");
        // TOML value not overridden by env should remain
        assert_eq!(config.provider.api_key, "sk-toml");
        Ok(())
    });
}

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("ESTUDIA_DATABASE__PATH", "env.db");

        // No TOML file -- just defaults + env
        let config: EstudiaConfig = Figment::from(Serialized::defaults(EstudiaConfig::default()))
            .merge(Env::prefixed("ESTUDIA_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "env.db");
        Ok(())
    });
}

/// Documents the figment gotcha: typo'd env var keys are silently ignored.
/// The value stays at its default because figment doesn't know "modle" should be "model".
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("ESTUDIA_PROVIDER__MODLE", "gpt-5");

        let config: EstudiaConfig = Figment::from(Serialized::defaults(EstudiaConfig::default()))
            .merge(Env::prefixed("ESTUDIA_").split("__"))
            .extract()?;

        // "modle" is not a known field -- silently ignored, model stays at default
        assert_eq!(
            config.provider.model, "gpt-4o-mini",
            "typo'd env var should be silently ignored by figment"
        );
        Ok(())
    });
}
