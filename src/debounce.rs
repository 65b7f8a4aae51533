//! Trailing-edge debouncer driven by host timestamps.
//!
//! The engine runs synchronously and owns no timers, so debouncing is an
//! explicit value the host pumps with its own clock (`performance.now()` in
//! the browser, any millisecond counter in tests): [`Debouncer::schedule`]
//! on every input event, [`Debouncer::poll`] on every frame tick. Each
//! schedule replaces the pending payload and re-arms the deadline, so only
//! the last call in a burst fires. A host that prefers a real timer can arm
//! one from [`Debouncer::due_at_ms`]; cancellation stays explicit either
//! way.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use crate::consts::SNAP_DEBOUNCE_MS;

#[derive(Debug, Clone, Copy)]
struct Pending<T> {
    payload: T,
    due_at_ms: f64,
}

/// A trailing-edge debouncer holding at most one pending payload.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: f64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with an explicit delay in milliseconds.
    #[must_use]
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms, pending: None }
    }

    /// Replace any pending payload and re-arm the deadline at
    /// `now_ms + delay`.
    pub fn schedule(&mut self, payload: T, now_ms: f64) {
        self.pending = Some(Pending { payload, due_at_ms: now_ms + self.delay_ms });
    }

    /// Take the payload if its deadline has been reached (inclusive).
    /// Returns `None` while the window is still open or nothing is pending.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now_ms >= p.due_at_ms) {
            self.pending.take().map(|p| p.payload)
        } else {
            None
        }
    }

    /// Discard any pending payload without firing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a payload is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending deadline in the host's clock, if anything is pending.
    #[must_use]
    pub fn due_at_ms(&self) -> Option<f64> {
        self.pending.as_ref().map(|p| p.due_at_ms)
    }

    /// The configured delay in milliseconds.
    #[must_use]
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SNAP_DEBOUNCE_MS)
    }
}
