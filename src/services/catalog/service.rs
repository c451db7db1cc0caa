//! Read-only provider catalog

use super::types::{CatalogStatistics, PriceRange, Provider};
use crate::utils::error::{HomeserveError, Result};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Validated list of providers in catalog order
#[derive(Debug, Clone, Default)]
pub struct ProviderCatalog {
    pub(super) providers: Arc<Vec<Provider>>,
}

impl ProviderCatalog {
    /// Build a catalog, rejecting malformed providers
    pub fn new(providers: Vec<Provider>) -> Result<Self> {
        validate_providers(&providers)?;
        Ok(Self {
            providers: Arc::new(providers),
        })
    }

    pub fn get(&self, id: u32) -> Option<&Provider> {
        self.providers.iter().find(|provider| provider.id == id)
    }

    /// Like [`get`](Self::get) but reports a missing id as an error
    pub fn require(&self, id: u32) -> Result<&Provider> {
        self.get(id)
            .ok_or_else(|| HomeserveError::not_found(format!("Provider not found: {}", id)))
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn by_category(&self, category_id: u32) -> impl Iterator<Item = &Provider> {
        self.providers
            .iter()
            .filter(move |provider| provider.category_id == category_id)
    }

    pub fn count_in_category(&self, category_id: u32) -> usize {
        self.by_category(category_id).count()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Get catalog statistics
    pub fn statistics(&self) -> CatalogStatistics {
        let mut per_category = BTreeMap::new();
        let mut price_range: Option<PriceRange> = None;

        for provider in self.providers.iter() {
            *per_category.entry(provider.category_id).or_insert(0) += 1;

            let price = provider.price_per_hour;
            price_range = Some(match price_range {
                Some(range) => PriceRange {
                    min: range.min.min(price),
                    max: range.max.max(price),
                },
                None => PriceRange {
                    min: price,
                    max: price,
                },
            });
        }

        CatalogStatistics {
            total_providers: self.providers.len(),
            per_category,
            price_range,
        }
    }
}

fn validate_providers(providers: &[Provider]) -> Result<()> {
    let mut ids = HashSet::new();

    for provider in providers {
        if !ids.insert(provider.id) {
            return Err(HomeserveError::validation(format!(
                "Duplicate provider id: {}",
                provider.id
            )));
        }

        if provider.name.trim().is_empty() {
            return Err(HomeserveError::validation(format!(
                "Provider {} has an empty name",
                provider.id
            )));
        }

        if !(0.0..=5.0).contains(&provider.rating) {
            return Err(HomeserveError::validation(format!(
                "Provider {} rating must be between 0 and 5, got {}",
                provider.id, provider.rating
            )));
        }

        if !provider.price_per_hour.is_finite() || provider.price_per_hour <= 0.0 {
            return Err(HomeserveError::validation(format!(
                "Provider {} price per hour must be positive, got {}",
                provider.id, provider.price_per_hour
            )));
        }

        let location = &provider.location;
        if !(-90.0..=90.0).contains(&location.lat) || !(-180.0..=180.0).contains(&location.lng) {
            return Err(HomeserveError::validation(format!(
                "Provider {} has coordinates out of range: ({}, {})",
                provider.id, location.lat, location.lng
            )));
        }
    }

    Ok(())
}
