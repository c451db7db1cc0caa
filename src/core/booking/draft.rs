//! In-progress booking form state

use crate::core::pricing::ParsedHours;
use crate::core::service_types::STANDARD_SERVICE_TYPE;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Fields the user is editing in the booking sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingDraft {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Raw text of the hours field, not yet validated
    pub hours_text: String,
    pub note: String,
    pub selected_service_type_id: String,
}

impl BookingDraft {
    /// A fresh draft dated `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            date: now.date(),
            time: now.time(),
            hours_text: String::new(),
            note: String::new(),
            selected_service_type_id: STANDARD_SERVICE_TYPE.to_string(),
        }
    }

    pub fn reset(&mut self, now: NaiveDateTime) {
        *self = Self::new(now);
    }

    /// Whether the editable fields hold their defaults (date and time aside)
    pub fn is_pristine(&self) -> bool {
        self.hours_text.is_empty()
            && self.note.is_empty()
            && self.selected_service_type_id == STANDARD_SERVICE_TYPE
    }

    pub fn parsed_hours(&self) -> ParsedHours {
        ParsedHours::parse(&self.hours_text)
    }
}
