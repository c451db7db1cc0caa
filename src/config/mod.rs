//! Configuration management for homeserve
//!
//! Handles loading and validating the booking, catalog, logging and theme
//! sections.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{HomeserveError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming the provider catalog file
pub const ENV_PROVIDERS_PATH: &str = "HOMESERVE_PROVIDERS_PATH";
/// Environment variable overriding the currency symbol
pub const ENV_CURRENCY_SYMBOL: &str = "HOMESERVE_CURRENCY_SYMBOL";
/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "HOMESERVE_LOG_LEVEL";
/// Environment variable switching JSON log output
pub const ENV_LOG_JSON: &str = "HOMESERVE_LOG_JSON";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Application configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| HomeserveError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let app: AppConfig = serde_yaml::from_str(content)?;

        let config = Self { app };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Build configuration from defaults plus whatever `lookup` returns
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut app = AppConfig::default();

        if let Some(path) = lookup(ENV_PROVIDERS_PATH) {
            app.catalog.providers_path = Some(path.into());
        }
        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            app.booking.currency_symbol = symbol;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            app.logging.level = level.to_lowercase();
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            app.logging.json = parse_bool(&json).ok_or_else(|| {
                HomeserveError::Config(format!("{} must be true or false, got {}", ENV_LOG_JSON, json))
            })?;
        }

        let config = Self { app };
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the environment
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => Self::from_env(),
        }
    }

    /// Get booking configuration
    pub fn booking(&self) -> &BookingConfig {
        &self.app.booking
    }

    /// Get catalog configuration
    pub fn catalog(&self) -> &CatalogConfig {
        &self.app.catalog
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.app.logging
    }

    /// Get theme configuration
    pub fn theme(&self) -> &ThemeConfig {
        &self.app.theme
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.app
            .booking
            .validate()
            .map_err(|e| HomeserveError::Config(format!("Booking config error: {}", e)))?;

        self.app
            .catalog
            .validate()
            .map_err(|e| HomeserveError::Config(format!("Catalog config error: {}", e)))?;

        self.app
            .logging
            .validate()
            .map_err(|e| HomeserveError::Config(format!("Logging config error: {}", e)))?;

        self.app
            .theme
            .validate()
            .map_err(|e| HomeserveError::Config(format!("Theme config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.app)?)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
