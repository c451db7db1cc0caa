//! Core booking engine
//!
//! Service tiers, the pricing rule, and the booking session state machine.
//! Nothing in here performs I/O.

pub mod booking;
pub mod pricing;
pub mod service_types;

pub use booking::{BookingDraft, BookingResult, BookingSession, ServiceOffer, SessionState};
pub use pricing::{ParsedHours, PricingRule, format_total};
pub use service_types::{ServiceTypeCatalog, ServiceTypeOption};
