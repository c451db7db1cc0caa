//! Configuration validation
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `booking_validators`: Booking and service tier validators
//! - `app_validators`: Catalog and logging validators
//! - `theme_validators`: Design token validators
//! - `tests`: Test suite for all validators

mod app_validators;
mod booking_validators;
mod theme_validators;
mod trait_def;

pub use theme_validators::is_valid_color;
pub use trait_def::Validate;
