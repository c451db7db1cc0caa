//! Display formats for dates, times and amounts

use crate::config::BookingConfig;
use crate::core::pricing::display_amount;
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveTime};
use std::fmt::Write;

pub const DEFAULT_DATE_FORMAT: &str = "%a %b %d %Y";
pub const DEFAULT_TIME_FORMAT: &str = "%I:%M %p";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₦";

/// How a session renders its draft for display
#[derive(Debug, Clone, PartialEq)]
pub struct BookingFormats {
    pub currency_symbol: String,
    pub date_format: String,
    pub time_format: String,
}

impl Default for BookingFormats {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl From<&BookingConfig> for BookingFormats {
    fn from(config: &BookingConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            date_format: config.date_format.clone(),
            time_format: config.time_format.clone(),
        }
    }
}

impl BookingFormats {
    pub fn render_date(&self, date: NaiveDate) -> String {
        render(&date.format(&self.date_format), || {
            date.format(DEFAULT_DATE_FORMAT).to_string()
        })
    }

    pub fn render_time(&self, time: NaiveTime) -> String {
        render(&time.format(&self.time_format), || {
            time.format(DEFAULT_TIME_FORMAT).to_string()
        })
    }

    pub fn render_amount(&self, amount: f64) -> String {
        display_amount(&self.currency_symbol, amount)
    }
}

/// Whether a strftime pattern only contains specifiers chrono understands
pub fn is_valid_strftime(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

// chrono reports a bad pattern as a fmt::Error at write time
fn render(formatted: &dyn std::fmt::Display, fallback: impl FnOnce() -> String) -> String {
    let mut out = String::new();
    match write!(out, "{}", formatted) {
        Ok(()) => out,
        Err(_) => fallback(),
    }
}
