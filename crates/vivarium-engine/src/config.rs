//! Configuration loading for the engine and its API front.
//!
//! The canonical configuration lives in `vivarium.yaml` at the project
//! root. This module defines strongly-typed structs mirroring the YAML
//! structure and a loader that reads and validates the file. Every field
//! has a default, so a missing or partial file yields a playable baseline.

use std::path::Path;

use serde::Deserialize;
use vivarium_pets::BalanceConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address the API binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    String::from("0.0.0.0:8080")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Balance tunables for the care loop.
    #[serde(default)]
    pub balance: BalanceConfig,
}

impl EngineConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `VIVARIUM_BIND_ADDR` environment variable overrides
    /// `server.bind_addr`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var("VIVARIUM_BIND_ADDR")
            && !addr.is_empty()
        {
            self.server.bind_addr = addr;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = EngineConfig::parse("{}").ok();
        assert_eq!(config, Some(EngineConfig::default()));
    }

    #[test]
    fn partial_yaml_overrides_only_named_fields() {
        let yaml = "
balance:
  decay:
    hunger_per_hour: 8
  actions:
    feed_hunger: 20
";
        let config = EngineConfig::parse(yaml).ok();
        let config = config.unwrap_or_default();
        assert_eq!(config.balance.decay.hunger_per_hour, 8);
        assert_eq!(config.balance.decay.happiness_per_hour, 3); // default kept
        assert_eq!(config.balance.actions.feed_hunger, 20);
        assert_eq!(config.balance.actions.play_xp, 10); // default kept
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        assert!(EngineConfig::parse("balance: [not-a-map").is_err());
    }

    #[test]
    fn server_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
    }
}
