//! Fixed-count, non-repeating interval timer polled from the event loop

use std::time::{Duration, Instant};

/// Fires ticks `0..total` once each, one `period` apart, until finished or cancelled
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    total: usize,
    fired: usize,
    next_due: Instant,
    cancelled: bool,
}

impl Interval {
    /// Arm a timer whose first tick is due one period after `now`
    pub fn start(period: Duration, total: usize, now: Instant) -> Self {
        Self {
            period,
            total,
            fired: 0,
            next_due: now + period,
            cancelled: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.cancelled || self.fired >= self.total
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Fire at most one due tick. Late polls catch up one tick per call
    /// rather than skipping frames.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        if self.is_finished() || now < self.next_due {
            return None;
        }
        self.next_due += self.period;
        self.fire()
    }

    /// Fire the next tick immediately, ignoring the clock
    pub fn next_tick(&mut self) -> Option<usize> {
        if self.is_finished() {
            return None;
        }
        self.next_due += self.period;
        self.fire()
    }

    /// Time left until the next tick is due, if any remain
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        if self.is_finished() {
            None
        } else {
            Some(self.next_due.saturating_duration_since(now))
        }
    }

    fn fire(&mut self) -> Option<usize> {
        let frame = self.fired;
        self.fired += 1;
        Some(frame)
    }
}
