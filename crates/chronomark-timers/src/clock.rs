//! Monotonic clock sources.
//!
//! Timers never read the wall clock. Every reading is a [`Duration`]
//! since a process-local origin, so durations between readings are
//! immune to wall-clock adjustments.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// A monotonic clock read, expressed as time since an arbitrary
/// process-local origin.
///
/// Implementations must be monotonic: successive `now()` calls never
/// go backwards.
pub trait ClockSource: Send + Sync {
    /// Current reading.
    fn now(&self) -> Duration;
}

/// Monotonic source anchored at construction, backed by [`Instant`].
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Shared handle ready to hand to a [`crate::Timers`] registry.
    #[must_use]
    pub fn shared() -> Arc<dyn ClockSource> {
        Arc::new(Self::new())
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock for tests. Time only moves when
/// [`ManualClock::advance`] is called.
#[derive(Debug, Default)]
pub struct ManualClock {
    micros: AtomicU64,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the reading forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.micros
            .fetch_add(by.as_micros() as u64, Ordering::Relaxed);
    }

    /// Jump the reading to an absolute value.
    pub fn set(&self, to: Duration) {
        self.micros.store(to.as_micros() as u64, Ordering::Relaxed);
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_micros(self.micros.load(Ordering::Relaxed))
    }
}
