//! # homeserve-rs
//!
//! Booking price and state engine for a home-services marketplace.
//!
//! ## Features
//!
//! - **Pricing**: hourly rate × hours × service-tier multiplier, with lenient
//!   hours parsing and two-decimal totals
//! - **Booking sheet**: an explicit Closed/Open session with a draft,
//!   date/time pickers and a one-shot confirmation callback
//! - **Discovery**: provider catalog, category carousel, search, filters
//!   and sorting
//! - **Configuration**: YAML or environment driven, validated on load
//!
//! ## Quick Start
//!
//! ```rust
//! use homeserve_rs::{BookingSession, PricingRule, ServiceOffer};
//!
//! let mut session = BookingSession::new(PricingRule::default());
//! let offer = ServiceOffer::new("John Smith", 35.0)?;
//!
//! session.open(offer, |booking| println!("booked: {}", booking.total));
//! session.set_hours_text("2");
//! session.set_service_type("priority");
//! assert_eq!(session.current_total(), 105.0);
//!
//! let result = session.confirm().expect("session is open");
//! assert_eq!(result.total, "105.00");
//! # Ok::<(), homeserve_rs::HomeserveError>(())
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{HomeserveError, Result};

pub use crate::core::booking::{
    BookingDraft, BookingEvent, BookingEventType, BookingFormats, BookingResult, BookingSession,
    Clock, FixedClock, ServiceOffer, SessionId, SessionRegistry, SessionState, SystemClock,
};
pub use crate::core::pricing::{
    ParsedHours, PriceBreakdown, PricingRule, display_amount, format_total,
};
pub use crate::core::service_types::{ServiceTypeCatalog, ServiceTypeOption};
pub use services::{
    HomeFeed, Provider, ProviderCatalog, ProviderFilter, ServiceDetails, SortOption,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
