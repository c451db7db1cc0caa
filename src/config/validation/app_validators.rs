//! Catalog and logging configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.providers_path {
            if path.as_os_str().is_empty() {
                return Err("Providers path cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !LOG_LEVELS.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid log level: {}. Expected one of {}",
                self.level,
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}
