// Configuration module for chaoyin
// This module handles loading and parsing configuration from ~/.config/chaoyin/config.toml

mod types;

pub use types::{BrowseConfig, Config, DEFAULT_PAGE_SIZE, DatasetConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ChaoyinError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/chaoyin/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from_path(&get_config_path())
}

/// Loads configuration from an explicit path, with the same fallbacks as
/// [`load_config`]
pub fn load_config_from_path(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(config_path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to load config file {:?}: {}", config_path, e);
            let warning = match e {
                ChaoyinError::Io(e) => format!("Failed to read config: {}", e),
                other => other.to_string(),
            };
            ConfigResult {
                config: Config::default(),
                warning: Some(warning),
            }
        }
    }
}

fn read_config(config_path: &Path) -> Result<Config, ChaoyinError> {
    let contents = fs::read_to_string(config_path)?;
    parse_config(&contents)
}

/// Parses and validates TOML configuration text
pub fn parse_config(contents: &str) -> Result<Config, ChaoyinError> {
    let config: Config = toml::from_str(contents)?;

    if config.browse.page_size == 0 {
        return Err(ChaoyinError::ConfigValue(
            "browse.page_size must be at least 1".to_string(),
        ));
    }

    Ok(config)
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/chaoyin/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("chaoyin")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
