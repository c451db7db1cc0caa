//! Home screen discovery: search, category carousel, filter sheet and sorting

mod feed;
mod filter;

pub use feed::HomeFeed;
pub use filter::{ProviderFilter, SortOption, matches_search};
