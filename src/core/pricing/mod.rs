//! Booking price calculation
//!
//! A total is `hourly_rate × hours × multiplier`. The hours field is free
//! text, so parsing is lenient: anything unreadable prices as zero hours.

mod hours;
mod money;
mod rule;

pub use hours::{ParsedHours, lenient_hours};
pub use money::{display_amount, format_total};
pub use rule::{PriceBreakdown, PricingRule};
