//! The open/closed lifecycle around one booking attempt

use super::clock::{Clock, SystemClock};
use super::draft::BookingDraft;
use super::events::{BookingEvent, BookingEventType, DismissReason, DraftField};
use super::format::BookingFormats;
use super::offer::ServiceOffer;
use super::picker::{PickerKind, PickerVisibility, Pickers};
use super::result::BookingResult;
use crate::config::BookingConfig;
use crate::core::pricing::{PricingRule, format_total};
use crate::utils::error::Result;
use chrono::{NaiveDate, NaiveTime};
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Receives the booking when the user confirms
pub type ConfirmCallback = Box<dyn FnMut(BookingResult) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open,
}

struct ActiveBooking {
    offer: ServiceOffer,
    on_confirm: ConfirmCallback,
}

/// State machine behind the booking sheet
///
/// `Closed → Open` on [`open`](Self::open); field edits keep it `Open`;
/// [`confirm`](Self::confirm) and [`dismiss`](Self::dismiss) return it to
/// `Closed` with the draft reset. No transition can fail. Edits and
/// confirmation while `Closed` are ignored.
pub struct BookingSession {
    pricing: PricingRule,
    formats: BookingFormats,
    clock: Arc<dyn Clock>,
    draft: BookingDraft,
    pickers: Pickers,
    active: Option<ActiveBooking>,
    event_sender: broadcast::Sender<BookingEvent>,
}

impl fmt::Debug for BookingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingSession")
            .field("state", &self.state())
            .field("offer", &self.offer())
            .field("draft", &self.draft)
            .field("pickers", &self.pickers)
            .finish_non_exhaustive()
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new(PricingRule::default())
    }
}

impl BookingSession {
    pub fn new(pricing: PricingRule) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let (event_sender, _) = broadcast::channel(64);

        Self {
            pricing,
            formats: BookingFormats::default(),
            draft: BookingDraft::new(clock.now()),
            clock,
            pickers: Pickers::default(),
            active: None,
            event_sender,
        }
    }

    /// Build a session from the `booking` config section
    pub fn from_config(config: &BookingConfig) -> Result<Self> {
        let pricing = PricingRule::from_config(config)?;
        Ok(Self::new(pricing).with_formats(BookingFormats::from(config)))
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.draft = BookingDraft::new(clock.now());
        self.clock = clock;
        self
    }

    pub fn with_formats(mut self, formats: BookingFormats) -> Self {
        self.formats = formats;
        self
    }

    // ==================== Lifecycle ====================

    /// Open the sheet for `service` with a fresh draft
    ///
    /// Opening an already open session starts over: the previous draft and
    /// callback are dropped without being invoked.
    pub fn open<F>(&mut self, service: ServiceOffer, on_confirm: F)
    where
        F: FnMut(BookingResult) + Send + 'static,
    {
        if let Some(previous) = &self.active {
            debug!(
                "Reopening booking sheet, discarding draft for {}",
                previous.offer.name()
            );
        }

        self.draft.reset(self.clock.now());
        self.pickers.hide_all();
        info!(
            "Booking sheet opened for {} at {}/h",
            service.name(),
            service.hourly_rate()
        );

        let service_name = service.name().to_string();
        self.active = Some(ActiveBooking {
            offer: service,
            on_confirm: Box::new(on_confirm),
        });
        self.publish(BookingEventType::Opened, service_name);
    }

    /// Book the current draft
    ///
    /// Builds the result, hands it to the callback exactly once, resets the
    /// draft and closes. Returns `None` when the session is not open.
    pub fn confirm(&mut self) -> Option<BookingResult> {
        let Some(mut active) = self.active.take() else {
            debug!("Ignoring confirm on a closed booking sheet");
            return None;
        };

        let result = self.build_result(&active.offer);
        (active.on_confirm)(result.clone());

        info!(
            "Booking confirmed for {}: {} hour(s), {} tier, total {}",
            active.offer.name(),
            result.hours,
            result.service_type_id,
            result.total
        );

        self.close();
        self.publish(
            BookingEventType::Confirmed {
                total: result.total.clone(),
            },
            active.offer.name().to_string(),
        );
        Some(result)
    }

    /// Close via the header's close button, discarding the draft
    pub fn dismiss(&mut self) {
        self.dismiss_with(DismissReason::CloseButton);
    }

    /// Close via a tap on the backdrop, discarding the draft
    pub fn tap_outside(&mut self) {
        self.dismiss_with(DismissReason::OutsideTap);
    }

    pub fn dismiss_with(&mut self, reason: DismissReason) {
        let Some(active) = self.active.take() else {
            return;
        };

        info!("Booking sheet for {} dismissed ({:?})", active.offer.name(), reason);
        self.close();
        self.publish(
            BookingEventType::Dismissed(reason),
            active.offer.name().to_string(),
        );
    }

    fn close(&mut self) {
        self.draft.reset(self.clock.now());
        self.pickers.hide_all();
    }

    // ==================== Field edits ====================

    pub fn set_date(&mut self, date: NaiveDate) {
        self.edit(DraftField::Date, |draft| draft.date = date);
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.edit(DraftField::Time, |draft| draft.time = time);
    }

    pub fn set_hours_text(&mut self, hours_text: impl Into<String>) {
        let hours_text = hours_text.into();
        self.edit(DraftField::Hours, |draft| draft.hours_text = hours_text);
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        let note = note.into();
        self.edit(DraftField::Note, |draft| draft.note = note);
    }

    pub fn set_service_type(&mut self, service_type_id: impl Into<String>) {
        let service_type_id = service_type_id.into();
        self.edit(DraftField::ServiceType, |draft| {
            draft.selected_service_type_id = service_type_id
        });
    }

    fn edit(&mut self, field: DraftField, apply: impl FnOnce(&mut BookingDraft)) {
        let Some(active) = &self.active else {
            debug!("Ignoring {:?} edit on a closed booking sheet", field);
            return;
        };

        let service_name = active.offer.name().to_string();
        apply(&mut self.draft);
        debug!("Booking draft {:?} updated", field);
        self.publish(BookingEventType::FieldEdited(field), service_name);
    }

    // ==================== Pickers ====================

    pub fn show_picker(&mut self, kind: PickerKind) {
        if self.is_open() {
            self.pickers.set(kind, PickerVisibility::Shown);
        }
    }

    /// Dismiss a picker without choosing; the draft keeps its value
    pub fn cancel_picker(&mut self, kind: PickerKind) {
        self.pickers.set(kind, PickerVisibility::Hidden);
    }

    /// Choose a date in the date picker, which then hides
    pub fn pick_date(&mut self, date: NaiveDate) {
        if self.pickers.get(PickerKind::Date) == PickerVisibility::Shown {
            self.pickers.set(PickerKind::Date, PickerVisibility::Hidden);
            self.set_date(date);
        }
    }

    /// Choose a time in the time picker, which then hides
    pub fn pick_time(&mut self, time: NaiveTime) {
        if self.pickers.get(PickerKind::Time) == PickerVisibility::Shown {
            self.pickers.set(PickerKind::Time, PickerVisibility::Hidden);
            self.set_time(time);
        }
    }

    pub fn picker(&self, kind: PickerKind) -> PickerVisibility {
        self.pickers.get(kind)
    }

    // ==================== Read-only projections ====================

    pub fn state(&self) -> SessionState {
        if self.active.is_some() {
            SessionState::Open
        } else {
            SessionState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn offer(&self) -> Option<&ServiceOffer> {
        self.active.as_ref().map(|active| &active.offer)
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn pricing(&self) -> &PricingRule {
        &self.pricing
    }

    pub fn formats(&self) -> &BookingFormats {
        &self.formats
    }

    /// Live total for the draft; 0 while closed
    pub fn current_total(&self) -> f64 {
        let hourly_rate = self.offer().map(ServiceOffer::hourly_rate).unwrap_or(0.0);
        self.pricing.compute_total(
            hourly_rate,
            &self.draft.hours_text,
            &self.draft.selected_service_type_id,
        )
    }

    /// Live total with the currency symbol, e.g. `₦105.00`
    pub fn current_total_display(&self) -> String {
        self.formats.render_amount(self.current_total())
    }

    /// Whether the hours field holds text that is not a usable number
    pub fn hours_warning(&self) -> bool {
        self.draft.parsed_hours().is_invalid()
    }

    pub fn date_display(&self) -> String {
        self.formats.render_date(self.draft.date)
    }

    pub fn time_display(&self) -> String {
        self.formats.render_time(self.draft.time)
    }

    /// Subscribe to lifecycle events
    pub fn subscribe_to_events(&self) -> broadcast::Receiver<BookingEvent> {
        self.event_sender.subscribe()
    }

    fn build_result(&self, offer: &ServiceOffer) -> BookingResult {
        let total = self.pricing.compute_total(
            offer.hourly_rate(),
            &self.draft.hours_text,
            &self.draft.selected_service_type_id,
        );

        BookingResult {
            date: self.draft.date,
            time: self.draft.time,
            date_display: self.formats.render_date(self.draft.date),
            time_display: self.formats.render_time(self.draft.time),
            hours: self.draft.hours_text.clone(),
            note: self.draft.note.clone(),
            service_type_id: self.draft.selected_service_type_id.clone(),
            total: format_total(total),
            total_amount: total,
        }
    }

    fn publish(&self, event_type: BookingEventType, service_name: String) {
        // no subscribers is fine
        let _ = self.event_sender.send(BookingEvent {
            event_type,
            service_name,
            timestamp: SystemTime::now(),
        });
    }
}
