//! Request sequencing and per-component load state.
//!
//! Each component that fetches owns a [`RequestSeq`]. Issuing a request
//! hands out a [`Ticket`]; only the response carrying the latest ticket is
//! applied, so a slow response to an earlier selection can never overwrite
//! a newer one.

use log::debug;

/// Identifies one issued request within its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn number(self) -> u64 {
        self.0
    }
}

/// Monotonic request counter for one component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Issue a new ticket, superseding every earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// Where a [`Resource`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Error,
}

/// Data slot, loading flag and error slot of one fetching component.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    seq: RequestSeq,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            seq: RequestSeq::default(),
        }
    }
}

impl<T> Resource<T> {
    /// Start a request, keeping the current data on screen until it resolves.
    pub fn begin(&mut self) -> Ticket {
        self.loading = true;
        self.error = None;
        self.seq.issue()
    }

    /// Start a request and discard the current data immediately.
    pub fn begin_fresh(&mut self) -> Ticket {
        self.data = None;
        self.begin()
    }

    /// Apply a response. Returns `false` (and changes nothing) when
    /// `ticket` has been superseded.
    ///
    /// An error keeps whatever data was already present.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, String>) -> bool {
        if !self.seq.is_current(ticket) {
            debug!("Discarding stale response for request #{}", ticket.number());
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => self.data = Some(data),
            Err(message) => self.error = Some(message),
        }
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.data.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }
}
