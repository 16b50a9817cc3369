//! Time budget for cooperative cancellation
//!
//! The caller reports the time left in the current turn through a [`Clock`].
//! [`TimeBudget`] compares it with a threshold at every recursive descent
//! and raises [`Cancelled`] once the remaining time drops below it.

use std::time::{Duration, Instant};

use crate::error::Cancelled;

/// Source of "milliseconds left in this turn"
pub trait Clock {
    fn remaining_ms(&self) -> f64;
}

impl<F: Fn() -> f64> Clock for F {
    #[inline]
    fn remaining_ms(&self) -> f64 {
        self()
    }
}

/// Wall-clock deadline measured from its creation
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Duration,
}

impl Deadline {
    pub fn new(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Clock for Deadline {
    /// Negative once the deadline has passed
    #[inline]
    fn remaining_ms(&self) -> f64 {
        let limit = self.limit.as_secs_f64() * 1000.0;
        limit - self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// A clock plus the threshold below which search must stop
#[derive(Clone, Copy)]
pub struct TimeBudget<'a> {
    clock: &'a dyn Clock,
    threshold_ms: f64,
}

impl<'a> TimeBudget<'a> {
    pub fn new(clock: &'a dyn Clock, threshold_ms: f64) -> Self {
        Self { clock, threshold_ms }
    }

    #[inline]
    pub fn remaining_ms(&self) -> f64 {
        self.clock.remaining_ms()
    }

    #[inline]
    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    /// Fail with [`Cancelled`] if less than the threshold is left
    #[inline]
    pub fn check(&self) -> Result<(), Cancelled> {
        let remaining_ms = self.clock.remaining_ms();
        if remaining_ms < self.threshold_ms {
            Err(Cancelled {
                remaining_ms,
                threshold_ms: self.threshold_ms,
            })
        } else {
            Ok(())
        }
    }
}

impl std::fmt::Debug for TimeBudget<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeBudget")
            .field("remaining_ms", &self.remaining_ms())
            .field("threshold_ms", &self.threshold_ms)
            .finish()
    }
}
