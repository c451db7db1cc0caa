//! The service being booked

use crate::utils::error::{HomeserveError, Result};
use serde::Serialize;

/// A provider's service as seen by the booking sheet
///
/// Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceOffer {
    name: String,
    hourly_rate: f64,
}

impl ServiceOffer {
    pub fn new(name: impl Into<String>, hourly_rate: f64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HomeserveError::validation("Service name must not be empty"));
        }
        if !hourly_rate.is_finite() || hourly_rate < 0.0 {
            return Err(HomeserveError::validation(format!(
                "Hourly rate must be a finite non-negative amount, got {}",
                hourly_rate
            )));
        }

        Ok(Self { name, hourly_rate })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }
}
