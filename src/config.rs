//! Server configuration.
//!
//! Loaded from a TOML file; every field is optional and falls back to its
//! default. Command-line flags override file values in the binary.
//!
//! ```toml
//! listen_addr = "0.0.0.0:5000"
//! cors_origin = "http://localhost:3000"
//! default_disk_size = 200
//! ```

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

use crate::models::DEFAULT_DISK_SIZE;

/// Errors reading or writing a config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Invalid(String),
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the API listens on.
    pub listen_addr: SocketAddr,
    /// Value of `Access-Control-Allow-Origin`.
    pub cors_origin: String,
    /// Disk size used when a request omits `diskSize`.
    pub default_disk_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            cors_origin: "*".to_string(),
            default_disk_size: DEFAULT_DISK_SIZE,
        }
    }
}

impl ServerConfig {
    /// Parses a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.check()?;
        Ok(config)
    }

    /// Renders the config as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.default_disk_size == 0 {
            return Err(ConfigError::Invalid(
                "default_disk_size must be at least 1".to_string(),
            ));
        }
        if self.cors_origin.trim().is_empty() {
            return Err(ConfigError::Invalid("cors_origin must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Loads configuration from a TOML file.
/// Falls back to defaults if the file doesn't exist.
pub fn load_config(path: impl AsRef<Path>) -> Result<ServerConfig, ConfigError> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let config = ServerConfig::from_toml(&contents)?;
            tracing::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            Ok(ServerConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Saves configuration to a TOML file.
/// Creates parent directories if they don't exist.
pub fn save_config(config: &ServerConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, config.to_toml()?)?;
    tracing::info!("Config saved to {}", path.display());
    Ok(())
}
