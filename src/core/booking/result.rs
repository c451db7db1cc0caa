//! The payload handed to the confirmation callback

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A confirmed booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResult {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Human-readable date, e.g. "Sat Oct 17 2026"
    pub date_display: String,
    /// Human-readable time, e.g. "09:30 AM"
    pub time_display: String,
    /// The hours field exactly as typed
    pub hours: String,
    pub note: String,
    pub service_type_id: String,
    /// Total with two decimals
    pub total: String,
    pub total_amount: f64,
}
