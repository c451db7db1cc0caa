//! Provider catalog
//!
//! Providers are read from a JSON document (`{"providers": [...]}`) and
//! checked once at load time. Categories and sample reviews are static.

mod categories;
mod loader;
mod reviews;
mod service;
mod types;


pub use categories::{CATEGORIES, category_by_id, category_by_slug};
pub use reviews::{SAMPLE_REVIEWS, ReviewSummary};
pub use service::ProviderCatalog;
pub use types::{CatalogStatistics, Category, Location, PriceRange, Provider, Review};
