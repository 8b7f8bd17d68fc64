// Configuration management module

use crate::error::{Result, ValueBidError};
use crate::log::LogLevel;
use crate::log_info;
use crate::utils::fs::{atomic_write, ensure_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod credentials;
pub mod server;

pub use credentials::Credentials;
pub use server::{ServerConfig, UpstreamConfig};

const APP_CONFIG_DIR: &str = ".valuebid_config";
const APP_CONFIG_NAME: &str = "valuebid_config.json";
const CONFIG_DIR_ENV: &str = "VALUEBID_CONFIG_DIR";

/// Main configuration structure for the ValueBid proxy service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: String,
    #[serde(skip)]
    pub config_dir: PathBuf,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            config_dir: get_config_dir(),
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default directory, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_dir())
    }

    /// Load configuration from `dir`, writing defaults when no file exists yet
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_path = dir.join(APP_CONFIG_NAME);

        log_info!("Loading configuration from {}", config_path.display());

        let mut config: Self = if config_path.exists() {
            let data = std::fs::read_to_string(&config_path).map_err(|e| {
                ValueBidError::Config(format!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                ))
            })?;

            serde_json::from_str(&data)
                .map_err(|e| ValueBidError::Config(format!("Failed to parse config file: {}", e)))?
        } else {
            log_info!("Config file not found, creating default configuration");
            Self::default()
        };
        config.config_dir = dir.to_path_buf();

        config.validate()?;
        config.save()?;

        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = self.config_path();

        log_info!("Saving configuration to {}", config_path.display());

        ensure_dir(&self.config_dir)?;

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ValueBidError::Config(format!("Failed to serialize config: {}", e)))?;

        atomic_write(&config_path, &json)?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.config_dir.to_str().is_none() {
            return Err(ValueBidError::Config(
                "Config directory path contains invalid UTF-8".to_string(),
            ));
        }

        self.server.validate()?;
        self.upstream.validate()?;

        Ok(())
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(APP_CONFIG_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.config_dir.join("logs")
    }
}

/// Get the configuration directory path.
///
/// `VALUEBID_CONFIG_DIR` wins; otherwise a directory next to the executable.
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }

    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|parent| parent.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_CONFIG_DIR)
}

/// Get the configuration file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join(APP_CONFIG_NAME)
}

/// Get the log directory path
pub fn get_log_dir() -> PathBuf {
    get_config_dir().join("logs")
}
