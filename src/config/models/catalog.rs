//! Provider catalog configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where provider data comes from
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogConfig {
    /// JSON file with providers; the bundled sample data is used when unset
    #[serde(default)]
    pub providers_path: Option<PathBuf>,
}
