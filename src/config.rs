//! Configuration management for dataset variant discovery
//!
//! Configuration is loaded from a TOML file with multi-source precedence
//! and zero-config defaults. Every field is optional in the file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{config, env, scan};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Discovery settings
    pub discovery: DiscoveryConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// TOML-friendly discovery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfigToml {
    /// Data directories to scan when none are given on the command line
    pub data_dirs: Vec<PathBuf>,
    /// Keep versions written before `features.json` existed
    pub include_old_format_versions: bool,
    /// Number of dataset directories enumerated in parallel
    pub scan_concurrency: usize,
}

impl Default for DiscoveryConfigToml {
    fn default() -> Self {
        Self {
            data_dirs: Vec::new(),
            include_old_format_versions: false,
            scan_concurrency: scan::DEFAULT_CONCURRENCY,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration with multi-source precedence:
    /// 1. Default values
    /// 2. Config file (if exists)
    /// 3. Environment variables
    ///
    /// Command-line arguments are applied by the caller.
    pub async fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let config_path = match config_file_override {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound { path });
                }
                Some(path)
            }
            None => Self::find_config_file(),
        };

        if let Some(path) = config_path {
            debug!("Loading config from: {}", path.display());
            config = Self::load_from_file(&path).await?;
        }

        config.apply_env_overrides(std::env::var_os(env::DATA_DIR));
        config.validate()?;
        Ok(config)
    }

    /// Replace configured data dirs with the environment override, if set
    fn apply_env_overrides(&mut self, data_dir: Option<OsString>) {
        if let Some(data_dir) = data_dir.filter(|value| !value.is_empty()) {
            debug!("{} overrides configured data dirs", env::DATA_DIR);
            self.discovery.data_dirs = vec![PathBuf::from(data_dir)];
        }
    }

    /// Check value ranges that TOML types cannot express
    pub fn validate(&self) -> ConfigResult<()> {
        let concurrency = self.discovery.scan_concurrency;
        if concurrency == 0 || concurrency > scan::MAX_CONCURRENCY {
            return Err(ConfigError::InvalidValue {
                field: "discovery.scan_concurrency".to_string(),
                value: concurrency.to_string(),
                reason: format!("Must be between 1 and {}", scan::MAX_CONCURRENCY),
            });
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !config::LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: format!("Expected one of: {}", config::LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    /// Write a default config file if none exists at `path`
    ///
    /// Returns `true` when a file was written. Existing files are only
    /// replaced with `force`.
    pub async fn initialize(path: &Path, force: bool) -> ConfigResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ConfigError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(path, Self::generate_default_config_content())
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Wrote default configuration to: {}", path.display());
        Ok(true)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(".").join(config::LOCAL_FILE_NAME)];
        if let Ok(user_path) = Self::default_config_path() {
            search_paths.push(user_path);
        }

        for path in search_paths {
            if path.exists() {
                debug!("Found config file: {}", path.display());
                return Some(path);
            }
        }

        debug!("No config file found in standard locations");
        None
    }

    /// Get the default config file path for the current user
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir
            .join(config::APP_DIR_NAME)
            .join(config::USER_FILE_NAME))
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::InvalidFormat {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Generate default configuration content with helpful comments
    fn generate_default_config_content() -> String {
        format!(
            r#"# Dataset Variants Configuration
# Every setting is optional; the values below are the defaults.

[discovery]
# Data directories to scan when none are given on the command line.
# {env_var} overrides this list. Empty means ~/tensorflow_datasets.
data_dirs = []

# Also report versions written before features.json was introduced
include_old_format_versions = false

# Number of dataset directories enumerated in parallel (1-{max})
scan_concurrency = {concurrency}

[logging]
# Log level when no -v/-q flag is given: error, warn, info, debug, trace
level = "warn"
"#,
            env_var = env::DATA_DIR,
            max = scan::MAX_CONCURRENCY,
            concurrency = scan::DEFAULT_CONCURRENCY,
        )
    }
}
