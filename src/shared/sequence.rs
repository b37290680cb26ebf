//! Latest-wins request sequencing.
//!
//! Each async fetch takes a [`Ticket`] before it starts and checks it when it
//! completes; results from a superseded ticket are discarded.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation token handed out by [`RequestSequence::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Monotonically increasing request counter. Shareable across tasks.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the most recently started request.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Invalidate every outstanding ticket without starting a request.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

impl Clone for RequestSequence {
    fn clone(&self) -> Self {
        Self {
            latest: AtomicU64::new(self.latest.load(Ordering::SeqCst)),
        }
    }
}
