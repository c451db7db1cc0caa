//! Booking configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::booking::is_valid_strftime;
use crate::core::service_types::ServiceTypeCatalog;

impl Validate for BookingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.currency_symbol.trim().is_empty() {
            return Err("Currency symbol cannot be empty".to_string());
        }

        if self.date_format.trim().is_empty() {
            return Err("Date format cannot be empty".to_string());
        }

        if !is_valid_strftime(&self.date_format) {
            return Err(format!("Invalid date format: {}", self.date_format));
        }

        if self.time_format.trim().is_empty() {
            return Err("Time format cannot be empty".to_string());
        }

        if !is_valid_strftime(&self.time_format) {
            return Err(format!("Invalid time format: {}", self.time_format));
        }

        ServiceTypeCatalog::check_options(&self.service_types)
    }
}
