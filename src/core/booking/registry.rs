//! Several booking sheets open at once, keyed by id

use super::clock::{Clock, SystemClock};
use super::format::BookingFormats;
use super::session::BookingSession;
use crate::core::pricing::PricingRule;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Identifier of one booking session in a [`SessionRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Owns independent booking sessions so that their drafts never collide
///
/// Sessions share one pricing rule, format set and clock. Closures passed to
/// [`with_session`](Self::with_session) run under the registry lock, so a
/// confirmation callback must not call back into the registry.
#[derive(Debug)]
pub struct SessionRegistry {
    pricing: PricingRule,
    formats: BookingFormats,
    clock: Arc<dyn Clock>,
    sessions: Mutex<HashMap<SessionId, BookingSession>>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(PricingRule::default(), BookingFormats::default())
    }
}

impl SessionRegistry {
    pub fn new(pricing: PricingRule, formats: BookingFormats) -> Self {
        Self {
            pricing,
            formats,
            clock: Arc::new(SystemClock),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Register a new closed session
    pub fn create(&self) -> SessionId {
        let id = SessionId::new();
        let session = BookingSession::new(self.pricing.clone())
            .with_formats(self.formats.clone())
            .with_clock(Arc::clone(&self.clock));

        self.sessions.lock().insert(id, session);
        debug!("Registered booking session {}", id);
        id
    }

    /// Run `f` against one session; `None` when the id is unknown
    pub fn with_session<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut BookingSession) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.lock();
        sessions.get_mut(&id).map(f)
    }

    pub fn remove(&self, id: SessionId) -> bool {
        let removed = self.sessions.lock().remove(&id).is_some();
        if removed {
            debug!("Removed booking session {}", id);
        }
        removed
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.lock().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    /// Ids of the sessions currently open
    pub fn open_sessions(&self) -> Vec<SessionId> {
        self.sessions
            .lock()
            .iter()
            .filter(|(_, session)| session.is_open())
            .map(|(id, _)| *id)
            .collect()
    }
}
