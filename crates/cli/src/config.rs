//! Configuration file support for agentry.
//!
//! Loads settings from `~/.agentry/config.toml` with the following
//! precedence: CLI arguments > Environment variables > Config file
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.agentry/config.toml
//!
//! [generate]
//! # API key for the generation endpoint
//! api_key = "sk-..."
//!
//! # Default generation model
//! model = "claude-sonnet-4-5"
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Generation settings.
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Configuration for the generation step.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateConfig {
    /// API key for the generation endpoint.
    pub api_key: Option<String>,
    /// Default generation model.
    pub model: Option<String>,
}

/// Returns the path to the config file (~/.agentry/config.toml).
fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".agentry").join("config.toml"))
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Ok(Some(config))` if the file exists and parses successfully.
/// Returns `Err` if the file exists but fails to parse.
pub fn load_config() -> Result<Option<Config>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&content)?;

    tracing::debug!(
        target: "agentry::config",
        path = %path.display(),
        "Loaded configuration file"
    );

    Ok(Some(config))
}

/// Applies configuration file settings to environment variables.
///
/// Only sets environment variables that are not already set, preserving the
/// precedence: CLI > ENV > config file.
pub fn apply_config_defaults() -> Result<()> {
    let Some(config) = load_config()? else {
        return Ok(());
    };

    if let Some(api_key) = config.generate.api_key {
        if std::env::var("AGENTRY_API_KEY").is_err() {
            std::env::set_var("AGENTRY_API_KEY", api_key);
        }
    }
    if let Some(model) = config.generate.model {
        if std::env::var("AGENTRY_MODEL").is_err() {
            std::env::set_var("AGENTRY_MODEL", model);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentry_test_utils::{env_guard, set_env_var};

    #[test]
    fn missing_home_or_file_is_none() {
        let _serial = env_guard();
        let tmp = tempfile::tempdir().unwrap();
        let _home = set_env_var("HOME", Some(tmp.path().to_str().unwrap()));

        assert!(load_config().unwrap().is_none());
    }

    #[test]
    fn parses_config_file_from_home() {
        let _serial = env_guard();
        let tmp = tempfile::tempdir().unwrap();
        let config_dir = tmp.path().join(".agentry");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "[generate]\napi_key = \"sk-test\"\nmodel = \"claude-sonnet-4-5\"\n",
        )
        .unwrap();
        let _home = set_env_var("HOME", Some(tmp.path().to_str().unwrap()));

        let config = load_config().unwrap().unwrap();
        assert_eq!(config.generate.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.generate.model.as_deref(), Some("claude-sonnet-4-5"));
    }

    #[test]
    fn env_vars_take_precedence_over_config_file() {
        let _serial = env_guard();
        let tmp = tempfile::tempdir().unwrap();
        let config_dir = tmp.path().join(".agentry");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "[generate]\nmodel = \"from-file\"\n")
            .unwrap();
        let _home = set_env_var("HOME", Some(tmp.path().to_str().unwrap()));
        let _model = set_env_var("AGENTRY_MODEL", Some("from-env"));
        let _key = set_env_var("AGENTRY_API_KEY", None);

        apply_config_defaults().unwrap();
        assert_eq!(std::env::var("AGENTRY_MODEL").unwrap(), "from-env");
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let _serial = env_guard();
        let tmp = tempfile::tempdir().unwrap();
        let config_dir = tmp.path().join(".agentry");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "not toml [").unwrap();
        let _home = set_env_var("HOME", Some(tmp.path().to_str().unwrap()));

        assert!(load_config().is_err());
    }
}
