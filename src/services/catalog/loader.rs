//! Data loading functionality for the provider catalog

use super::service::ProviderCatalog;
use super::types::Provider;
use crate::config::CatalogConfig;
use crate::utils::error::{HomeserveError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

const BUNDLED_PROVIDERS: &str = include_str!("../../../data/providers.json");

#[derive(Deserialize)]
struct ProviderDocument {
    providers: Vec<Provider>,
}

impl ProviderCatalog {
    /// Parse a `{"providers": [...]}` document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: ProviderDocument = serde_json::from_str(json)?;

        let catalog = Self::new(document.providers)?;
        debug!("Parsed {} providers", catalog.len());
        Ok(catalog)
    }

    /// Load providers from a local file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(HomeserveError::Io)?;

        let catalog = Self::from_json_str(&content)?;
        info!("Loaded {} providers from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// The sample providers compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_PROVIDERS)
    }

    /// Load from the configured file, or fall back to the bundled data
    pub async fn load(config: &CatalogConfig) -> Result<Self> {
        match &config.providers_path {
            Some(path) => Self::load_from_file(path).await,
            None => {
                debug!("No providers path configured, using bundled catalog");
                Self::bundled()
            }
        }
    }
}
