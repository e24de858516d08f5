//! The time source seam.
//!
//! Every operation asks the injected [`Clock`] for `now()` exactly once and
//! threads that instant through the whole pipeline, so decay, sleep timers
//! and status counters all agree on what time it is. Production uses
//! [`SystemClock`]; tests use [`ManualClock`] to step time deterministically.

use chrono::{DateTime, TimeDelta, Utc};

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A hand-cranked clock for tests.
///
/// Starts at the given instant and only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: std::sync::Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock frozen at the given instant.
    pub const fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: std::sync::Mutex::new(start),
        }
    }

    /// Jump to an absolute instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        if let Ok(mut now) = self.now.lock() {
            *now = instant;
        }
    }

    /// Move forward by a delta (a non-positive delta is ignored).
    pub fn advance(&self, delta: TimeDelta) {
        if let Ok(mut now) = self.now.lock()
            && let Some(next) = now.checked_add_signed(delta)
        {
            *now = next;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
            .lock()
            .map_or_else(|poisoned| **poisoned.get_ref(), |now| *now)
    }
}
