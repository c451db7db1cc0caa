//! Booking sheet state
//!
//! A [`BookingSession`] wraps one booking attempt: it is opened for a fixed
//! [`ServiceOffer`], edited field by field through its [`BookingDraft`], and
//! closed either by confirming (which hands a [`BookingResult`] to the
//! caller's callback) or by dismissing.

mod clock;
mod draft;
mod events;
mod format;
mod offer;
mod picker;
mod registry;
mod result;
mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use draft::BookingDraft;
pub use events::{BookingEvent, BookingEventType, DismissReason, DraftField};
pub use format::{
    BookingFormats, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT,
    is_valid_strftime,
};
pub use offer::ServiceOffer;
pub use picker::{PickerKind, PickerVisibility};
pub use registry::{SessionId, SessionRegistry};
pub use result::BookingResult;
pub use session::{BookingSession, ConfirmCallback, SessionState};
