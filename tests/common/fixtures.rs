//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use chrono::{NaiveDate, NaiveDateTime};
use homeserve_rs::services::catalog::Location;
use homeserve_rs::{BookingResult, BookingSession, FixedClock, Provider, ProviderCatalog};
use parking_lot::Mutex;
use std::sync::Arc;

/// Saturday 17 October 2026, 09:30
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 17)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .expect("valid fixture timestamp")
}

/// Factory for creating test providers
pub struct ProviderFactory;

impl ProviderFactory {
    /// A basic provider in the cleaning category
    pub fn create(id: u32) -> Provider {
        Provider {
            id,
            name: format!("Provider {}", id),
            category_id: 1,
            rating: 4.0,
            price_per_hour: 20.0,
            experience_years: 3,
            review_count: 10,
            location: Location {
                lat: 6.5,
                lng: 3.4,
                city: "Lagos".to_string(),
            },
            description: "General services".to_string(),
            image: String::new(),
            gallery: Vec::new(),
            services: Vec::new(),
        }
    }

    /// The plumber used throughout the booking scenarios
    pub fn john_smith() -> Provider {
        let mut provider = Self::create(1);
        provider.name = "John Smith".to_string();
        provider.category_id = 2;
        provider.rating = 4.7;
        provider.price_per_hour = 35.0;
        provider.review_count = 156;
        provider
    }

    pub fn with_price(id: u32, price_per_hour: f64) -> Provider {
        let mut provider = Self::create(id);
        provider.price_per_hour = price_per_hour;
        provider
    }

    pub fn with_rating(id: u32, rating: f64) -> Provider {
        let mut provider = Self::create(id);
        provider.rating = rating;
        provider
    }

    pub fn in_category(id: u32, category_id: u32) -> Provider {
        let mut provider = Self::create(id);
        provider.category_id = category_id;
        provider
    }

    /// Serialize providers into a catalog document
    pub fn document(providers: &[Provider]) -> String {
        serde_json::json!({ "providers": providers }).to_string()
    }

    pub fn catalog(providers: Vec<Provider>) -> ProviderCatalog {
        ProviderCatalog::new(providers).expect("fixture providers are valid")
    }
}

/// Factory for booking sessions pinned to [`fixed_now`]
pub struct SessionFactory;

impl SessionFactory {
    pub fn create() -> BookingSession {
        BookingSession::default().with_clock(Arc::new(FixedClock(fixed_now())))
    }

    /// A callback that records every result it receives
    pub fn recorder() -> (
        Arc<Mutex<Vec<BookingResult>>>,
        impl FnMut(BookingResult) + Send + 'static,
    ) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        (received, move |result| sink.lock().push(result))
    }
}

/// Factory for configuration documents
pub struct ConfigFactory;

impl ConfigFactory {
    /// A full YAML config with a custom weekend tier
    pub fn yaml() -> &'static str {
        r##"
booking:
  currency_symbol: "$"
  date_format: "%Y-%m-%d"
  time_format: "%H:%M"
  service_types:
    - id: standard
      display_name: Standard
      icon: checkmark-circle
      multiplier: 1.0
    - id: weekend
      display_name: Weekend
      icon: sunny
      multiplier: 1.25
    - id: emergency
      display_name: Emergency
      icon: alert-circle
      multiplier: 2.0

logging:
  level: warn
  json: true

theme:
  colors:
    primary: "#007AFF"
    secondary: "#555"
  font_sizes:
    xs: 10
    sm: 12
    md: 14
    lg: 18
    xl: 22
"##
    }
}
