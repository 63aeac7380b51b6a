//! Application configuration
//!
//! Configuration loaded from .hoox-counter.toml file.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".hoox-counter.toml";

/// Application configuration loaded from .hoox-counter.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Value the counter starts at and returns to on reset
    #[serde(default)]
    pub initial: i64,

    /// Amount added or removed per keypress
    #[serde(default = "default_step")]
    pub step: i64,

    /// Lowest value a decrement may reach
    #[serde(default)]
    pub floor: i64,

    /// Number of actions kept in the history panel
    #[serde(default = "default_history_len")]
    pub history_len: usize,
}

fn default_step() -> i64 {
    1
}

fn default_history_len() -> usize {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial: 0,
            step: default_step(),
            floor: 0,
            history_len: default_history_len(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        Self::from_content(load_config_file())
    }

    /// Parse `content` if present, falling back to defaults on any error
    fn from_content(content: Option<String>) -> Self {
        if let Some(content) = content {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).with_context(|| format!("Invalid {}", CONFIG_FILE))?;
        config
            .validate()
            .with_context(|| format!("Invalid {}", CONFIG_FILE))?;
        Ok(config)
    }

    /// Reject values the counter reducers and floor guard cannot uphold
    fn validate(&self) -> Result<()> {
        if self.step <= 0 {
            bail!("step must be positive, got {}", self.step);
        }
        if self.initial < self.floor {
            bail!(
                "initial ({}) must not be below floor ({})",
                self.initial,
                self.floor
            );
        }
        Ok(())
    }
}

/// Load config file content from CWD first, then home directory
fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Some(home_config) = home_config_path() {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            log::debug!("Loaded config from {}", home_config.display());
            return Some(content);
        }
    }

    None
}

/// ~/.hoox-counter.toml if HOME is set
fn home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.initial, 0);
        assert_eq!(config.step, 1);
        assert_eq!(config.floor, 0);
        assert_eq!(config.history_len, 10);
    }

    #[test]
    fn test_config_deserialize() {
        let config = AppConfig::parse(
            r#"
            step = 5
            floor = -20
        "#,
        )
        .unwrap();
        assert_eq!(
            config,
            AppConfig {
                initial: 0,
                step: 5,
                floor: -20,
                history_len: 10,
            }
        );
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = AppConfig::parse("step = \"many\"").unwrap_err();
        assert!(err.to_string().contains(".hoox-counter.toml"));
    }

    #[test]
    fn test_non_positive_step_is_rejected() {
        for content in ["step = -5\nfloor = 0", "step = 0"] {
            let err = AppConfig::parse(content).unwrap_err();
            assert!(format!("{:#}", err).contains("step must be positive"));
        }
    }

    #[test]
    fn test_rejected_config_falls_back_to_defaults() {
        let config = AppConfig::from_content(Some("step = -5\nfloor = 0".to_string()));
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_content(Some("step = 2".to_string()));
        assert_eq!(config.step, 2);
    }

    #[test]
    fn test_initial_below_floor_is_rejected() {
        let err = AppConfig::parse("initial = -3\nfloor = 0").unwrap_err();
        assert!(format!("{:#}", err).contains("must not be below floor"));

        let config = AppConfig::parse("initial = -3\nfloor = -3").unwrap();
        assert_eq!(config.initial, config.floor);
    }
}
