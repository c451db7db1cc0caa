//! Type definitions for the provider catalog

use crate::core::booking::ServiceOffer;
use crate::utils::error::{HomeserveError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A service provider as stored in the catalog file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: u32,
    pub name: String,
    /// One of the [`CATEGORIES`](super::CATEGORIES) ids
    pub category_id: u32,
    /// Average rating, 0 to 5
    pub rating: f64,
    pub price_per_hour: f64,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub review_count: u32,
    pub location: Location,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    /// Chips for the "Services Offered" section
    #[serde(default)]
    pub services: Vec<String>,
}

impl Provider {
    /// The name of this provider's category, if the id is known
    pub fn category_name(&self) -> Option<&'static str> {
        super::category_by_id(self.category_id).map(|category| category.name)
    }
}

impl TryFrom<&Provider> for ServiceOffer {
    type Error = HomeserveError;

    fn try_from(provider: &Provider) -> Result<Self> {
        ServiceOffer::new(provider.name.clone(), provider.price_per_hour)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub city: String,
}

/// A browsable service category
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    /// Lower-case identifier used by the filter sheet ("pet-care")
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub gradient: [&'static str; 2],
    /// Advertised provider count shown on the category card
    pub count: u32,
}

/// A customer review
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author: &'static str,
    pub stars: u8,
    pub posted: &'static str,
    pub text: &'static str,
}

/// Aggregate numbers over the whole catalog
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatistics {
    pub total_providers: usize,
    /// Provider count per category id
    pub per_category: BTreeMap<u32, usize>,
    /// `None` for an empty catalog
    pub price_range: Option<PriceRange>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}
