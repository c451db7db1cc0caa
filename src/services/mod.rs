//! Services module
//!
//! Provider data and the view-models built on top of the booking engine.

pub mod catalog;
pub mod details;
pub mod discovery;

pub use catalog::{
    CATEGORIES, CatalogStatistics, Category, Location, PriceRange, Provider, ProviderCatalog,
    Review, ReviewSummary,
};
pub use details::ServiceDetails;
pub use discovery::{HomeFeed, ProviderFilter, SortOption};
