//! Configuration loading and management
//!
//! Values are layered: built-in defaults, then an optional YAML file named by
//! `INTAKE_CONFIG`, then the environment (`MONGODB_URI`, `PORT`,
//! `STATIC_DIR`). The result is validated before use.

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Environment variable naming an optional YAML config file
pub const CONFIG_FILE_ENV: &str = "INTAKE_CONFIG";

/// Runtime configuration of the intake server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IntakeConfig {
    /// MongoDB connection string
    #[validate(length(min = 1, message = "database_url must not be empty"))]
    pub database_url: String,

    /// Database name; falls back to the one named in the URL, then `form`
    pub database_name: Option<String>,

    /// Collection holding submissions
    #[validate(length(min = 1, message = "collection must not be empty"))]
    pub collection: String,

    /// Listening port
    #[validate(range(min = 1, message = "port must be non-zero"))]
    pub port: u16,

    /// Directory holding the form page and its script
    pub static_dir: PathBuf,

    #[validate(range(min = 1))]
    pub server_selection_timeout_ms: u64,

    #[validate(range(min = 1))]
    pub connect_timeout_ms: u64,

    #[validate(range(min = 1))]
    pub idle_timeout_ms: u64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            database_url: "mongodb://localhost:27017/form".to_string(),
            database_name: None,
            collection: "forms".to_string(),
            port: 3000,
            static_dir: PathBuf::from("static"),
            server_selection_timeout_ms: 5_000,
            connect_timeout_ms: 5_000,
            idle_timeout_ms: 45_000,
        }
    }
}

impl IntakeConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup(CONFIG_FILE_ENV) {
            Some(path) => Self::from_yaml_file(&path)?,
            None => Self::default(),
        };

        let config = base.with_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    ///
    /// Keys missing from the file keep their defaults.
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("MONGODB_URI") {
            self.database_url = url;
        }

        if let Some(port) = lookup("PORT") {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("'{}' is not a valid port", port),
            })?;
        }

        if let Some(dir) = lookup("STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }

        Ok(self)
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
