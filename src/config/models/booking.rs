//! Booking configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Booking sheet configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfig {
    /// Symbol printed before totals
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// strftime pattern for the date row
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// strftime pattern for the time row
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Offered service tiers, in display order
    #[serde(default = "default_service_types")]
    pub service_types: Vec<ServiceTypeOption>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            service_types: default_service_types(),
        }
    }
}
