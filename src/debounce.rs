//! Trailing-edge debounce driven by the UI tick.
//!
//! Time is passed in explicitly so the event loop decides when to poll and
//! tests can step a clock without sleeping.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    settled: T,
    pending: Option<(T, Instant)>,
    delay: Duration,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    /// The initial value is settled immediately.
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            settled: initial,
            pending: None,
            delay,
        }
    }

    /// Last value that survived a full quiet period.
    pub fn value(&self) -> &T {
        &self.settled
    }

    /// Most recent input, settled or not.
    pub fn latest(&self) -> &T {
        self.pending
            .as_ref()
            .map(|(value, _)| value)
            .unwrap_or(&self.settled)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a new input and restarts the quiet period.
    pub fn update(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Emits the pending value once it has been stable for the full delay.
    ///
    /// Returns `None` while waiting, when nothing is pending, and when the
    /// settled value would not change.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let (_, since) = self.pending.as_ref()?;
        if now.saturating_duration_since(*since) < self.delay {
            return None;
        }
        let (value, _) = self.pending.take()?;
        if value == self.settled {
            return None;
        }
        self.settled = value.clone();
        Some(value)
    }

    /// Time left before [`poll`](Self::poll) can emit, if anything is pending.
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, since)| self.delay.saturating_sub(now.saturating_duration_since(*since)))
    }

    /// Sets the value immediately, dropping anything pending.
    pub fn force(&mut self, value: T) {
        self.pending = None;
        self.settled = value;
    }
}
