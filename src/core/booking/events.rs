//! Lifecycle events published by a booking session

use serde::Serialize;
use std::time::SystemTime;

/// Event published on every session transition
#[derive(Debug, Clone)]
pub struct BookingEvent {
    /// What happened
    pub event_type: BookingEventType,
    /// Name of the service the session is booking
    pub service_name: String,
    /// When it happened
    pub timestamp: SystemTime,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingEventType {
    /// The sheet was opened with a fresh draft
    Opened,
    /// One draft field changed
    FieldEdited(DraftField),
    /// The booking was confirmed and handed to the callback
    Confirmed { total: String },
    /// The sheet was closed without booking
    Dismissed(DismissReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Date,
    Time,
    Hours,
    Note,
    ServiceType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// The close button in the sheet header
    CloseButton,
    /// A tap on the dimmed backdrop
    OutsideTap,
}
