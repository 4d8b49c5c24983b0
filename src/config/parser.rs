use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use thiserror::Error;
use tracing::{info, warn};
use validator::Validate;

use super::models::{ApiConfig, DashboardConfig};

/// Errors that can occur during configuration parsing
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Configuration validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

/// Provides default configuration file path
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".blockdash")
        .join("config.yaml")
}

/// Parses and validates a configuration document, then resolves the API key
pub fn parse_config(content: &str) -> Result<DashboardConfig, ConfigError> {
    let mut config: DashboardConfig = if content.trim().is_empty() {
        DashboardConfig::default()
    } else {
        serde_yaml::from_str(content)?
    };

    config.validate()?;
    config.api.resolve_api_key();

    Ok(config)
}

/// Loads and validates the blockdash configuration
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<DashboardConfig, ConfigError> {
    let mut file = File::open(&config_path)?;

    let mut content = String::new();
    file.read_to_string(&mut content)?;

    parse_config(&content)
}

/// Loads the configuration from `path`, or from the default location.
///
/// An explicitly given path must exist. When no path is given and the default
/// file is absent the built-in defaults are used.
pub fn load_config_or_default(path: Option<&Path>) -> Result<DashboardConfig, ConfigError> {
    match path {
        Some(p) => {
            info!("Using configuration file: {:?}", p);
            load_config(p)
        }
        None => {
            let default_path = default_config_path();
            if default_path.exists() {
                info!("Using configuration file: {:?}", default_path);
                load_config(&default_path)
            } else {
                info!("No configuration file found, using defaults");
                parse_config("")
            }
        }
    }
}

impl ApiConfig {
    /// Reads the API key from the configured environment variable.
    ///
    /// A missing key is only logged; the upstream rejects unauthenticated
    /// requests and that surfaces as a fetch failure.
    pub fn resolve_api_key(&mut self) {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => {
                self.api_key = Some(SecretString::from(key.trim().to_string()));
            }
            _ => {
                warn!(
                    "Environment variable {} is not set, requests will be sent without an API key",
                    self.api_key_env
                );
                self.api_key = None;
            }
        }
    }

    /// Sets the API key directly
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }
}
