//! Service details screen
//!
//! One provider's page: profile data, favourite toggle, reviews and the
//! booking sheet.

use crate::core::booking::{BookingResult, BookingSession, ServiceOffer};
use crate::services::catalog::{Provider, Review, ReviewSummary, SAMPLE_REVIEWS};
use crate::utils::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

/// Chips shown when a provider lists no services of their own
pub const DEFAULT_SERVICES_OFFERED: [&str; 4] =
    ["Pipe Repairs", "Leak Detection", "Installation", "Maintenance"];

/// View-model for a provider's details page
#[derive(Debug)]
pub struct ServiceDetails {
    provider: Provider,
    favorite: bool,
    booking: BookingSession,
    notifications: Arc<Mutex<Vec<String>>>,
}

impl ServiceDetails {
    pub fn new(provider: Provider, booking: BookingSession) -> Self {
        Self {
            provider,
            favorite: false,
            booking,
            notifications: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Flip the favourite flag and return the new value
    pub fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub fn review_summary(&self) -> ReviewSummary {
        ReviewSummary::for_provider(&self.provider)
    }

    pub fn reviews(&self) -> &'static [Review] {
        &SAMPLE_REVIEWS
    }

    pub fn services_offered(&self) -> Vec<&str> {
        if self.provider.services.is_empty() {
            DEFAULT_SERVICES_OFFERED.to_vec()
        } else {
            self.provider.services.iter().map(String::as_str).collect()
        }
    }

    pub fn gallery_count(&self) -> usize {
        self.provider.gallery.len()
    }

    /// Open the booking sheet for this provider
    ///
    /// A confirmed booking is recorded as a notification message. Fails when
    /// the provider's name or rate cannot be booked.
    pub fn open_booking(&mut self) -> Result<()> {
        let offer = ServiceOffer::try_from(&self.provider)?;
        let name = self.provider.name.clone();
        let notifications = Arc::clone(&self.notifications);

        self.booking.open(offer, move |result| {
            let message = confirmation_message(&name, &result);
            info!("{}", message);
            notifications.lock().push(message);
        });
        Ok(())
    }

    pub fn booking(&self) -> &BookingSession {
        &self.booking
    }

    pub fn booking_mut(&mut self) -> &mut BookingSession {
        &mut self.booking
    }

    /// Messages recorded so far, oldest first
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().clone()
    }
}

pub fn confirmation_message(provider_name: &str, result: &BookingResult) -> String {
    format!(
        "Booking confirmed for {} on {} for {} hour(s).",
        provider_name, result.date_display, result.hours
    )
}
