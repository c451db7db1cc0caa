//! The pricing rule applied to booking drafts

use super::hours::lenient_hours;
use super::money::format_total;
use crate::config::BookingConfig;
use crate::core::service_types::ServiceTypeCatalog;
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Pure price calculation over a service-type catalog
///
/// Every call is side-effect free and cheap enough to run on each keystroke.
#[derive(Debug, Clone, Default)]
pub struct PricingRule {
    catalog: Arc<ServiceTypeCatalog>,
}

/// The factors behind a total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub hourly_rate: f64,
    pub hours: f64,
    pub service_type_id: String,
    pub multiplier: f64,
    pub total: f64,
}

impl PriceBreakdown {
    /// Total rendered with two decimals
    pub fn formatted_total(&self) -> String {
        format_total(self.total)
    }
}

impl PricingRule {
    pub fn new(catalog: Arc<ServiceTypeCatalog>) -> Self {
        Self { catalog }
    }

    /// Build a rule over the tiers in the `booking` config section
    pub fn from_config(config: &BookingConfig) -> Result<Self> {
        let catalog = ServiceTypeCatalog::new(config.service_types.clone())?;
        Ok(Self::new(Arc::new(catalog)))
    }

    pub fn catalog(&self) -> &ServiceTypeCatalog {
        &self.catalog
    }

    /// Shared handle to the catalog, for surfaces that list the tiers
    pub fn catalog_handle(&self) -> Arc<ServiceTypeCatalog> {
        Arc::clone(&self.catalog)
    }

    /// `hourly_rate × hours × multiplier`
    ///
    /// Unreadable hours price as zero; an unknown service type prices with
    /// a multiplier of 1.
    pub fn compute_total(&self, hourly_rate: f64, hours_text: &str, service_type_id: &str) -> f64 {
        hourly_rate * lenient_hours(hours_text) * self.multiplier_for(service_type_id)
    }

    /// Same as [`compute_total`](Self::compute_total), keeping the factors
    pub fn breakdown(
        &self,
        hourly_rate: f64,
        hours_text: &str,
        service_type_id: &str,
    ) -> PriceBreakdown {
        let hours = lenient_hours(hours_text);
        let multiplier = self.multiplier_for(service_type_id);

        PriceBreakdown {
            hourly_rate,
            hours,
            service_type_id: service_type_id.to_string(),
            multiplier,
            total: hourly_rate * hours * multiplier,
        }
    }

    /// Multiplier for a tier, 1 when the id is unknown
    pub fn multiplier_for(&self, service_type_id: &str) -> f64 {
        match self.catalog.multiplier(service_type_id) {
            Some(multiplier) => multiplier,
            None => {
                warn!(
                    "Unknown service type '{}', pricing with multiplier 1",
                    service_type_id
                );
                1.0
            }
        }
    }
}
