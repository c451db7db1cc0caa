//! Top-level application configuration

use super::*;
use serde::{Deserialize, Serialize};

/// All configuration sections; every section may be omitted
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Booking sheet settings
    #[serde(default)]
    pub booking: BookingConfig,
    /// Provider catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Design tokens
    #[serde(default)]
    pub theme: ThemeConfig,
}
