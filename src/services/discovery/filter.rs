//! Filtering and sorting of providers

use crate::services::catalog::Provider;
use crate::utils::error::HomeserveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering of the provider list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOption {
    /// Catalog order
    #[default]
    #[serde(rename = "popular")]
    Popular,
    /// Highest rated first
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        Self::Popular,
        Self::Rating,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Rating => "rating",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Popular => "Most Popular",
            Self::Rating => "Highest Rated",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
        }
    }

    /// Stable sort, so ties keep catalog order
    pub fn sort(self, providers: &mut [&Provider]) {
        match self {
            Self::Popular => {}
            Self::Rating => providers.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            Self::PriceLowToHigh => {
                providers.sort_by(|a, b| a.price_per_hour.total_cmp(&b.price_per_hour))
            }
            Self::PriceHighToLow => {
                providers.sort_by(|a, b| b.price_per_hour.total_cmp(&a.price_per_hour))
            }
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortOption {
    type Err = HomeserveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.id() == s.trim())
            .ok_or_else(|| HomeserveError::parsing(format!("Unknown sort option: {}", s)))
    }
}

/// Selections made in the filter sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderFilter {
    pub category_id: Option<u32>,
    /// "N & up"
    pub min_rating: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<SortOption>,
}

impl ProviderFilter {
    /// Number of selections, shown as the badge on the filter button
    pub fn active_count(&self) -> usize {
        [
            self.category_id.is_some(),
            self.min_rating.is_some(),
            self.min_price.is_some(),
            self.max_price.is_some(),
            self.sort.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn matches(&self, provider: &Provider) -> bool {
        if self.category_id.is_some_and(|id| provider.category_id != id) {
            return false;
        }
        if self.min_rating.is_some_and(|min| provider.rating < min) {
            return false;
        }
        if self.min_price.is_some_and(|min| provider.price_per_hour < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| provider.price_per_hour > max) {
            return false;
        }
        true
    }

    /// Providers matching both the filter and `query`, sorted
    pub fn apply<'a>(&self, providers: &'a [Provider], query: &str) -> Vec<&'a Provider> {
        let mut visible: Vec<&Provider> = providers
            .iter()
            .filter(|provider| self.matches(provider) && matches_search(provider, query))
            .collect();

        self.sort.unwrap_or_default().sort(&mut visible);
        visible
    }
}

/// Case-insensitive match on name, description, city and category name
///
/// A blank query matches everything.
pub fn matches_search(provider: &Provider, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let category = provider.category_name().unwrap_or_default();
    [
        provider.name.as_str(),
        provider.description.as_str(),
        provider.location.city.as_str(),
        category,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}
