//! Configuration data models
//!
//! This module defines all configuration structures used by the booking engine
//! and the `homeserve` binary.

#![allow(missing_docs)]

pub mod app;
pub mod booking;
pub mod catalog;
pub mod logging;
pub mod theme;

pub use app::*;
pub use booking::*;
pub use catalog::*;
pub use logging::*;
pub use theme::*;

use crate::core::booking::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
use crate::core::service_types::ServiceTypeOption;

pub fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

pub fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

pub fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

/// Standard, Priority and Emergency tiers
pub fn default_service_types() -> Vec<ServiceTypeOption> {
    ServiceTypeOption::defaults()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
