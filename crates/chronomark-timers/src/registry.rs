//! Registry of named chronographs sharing one clock.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::chronograph::{Chronograph, FormattedMark, Mark};
use crate::clock::{ClockSource, MonotonicClock};
use crate::error::{Result, TimerError};

/// Reserved bookkeeping timer created by [`Timers::new`].
pub const INTERNAL_TIMER: &str = "_internal_";

/// Named timers keyed by unique string name.
///
/// Every entry maps to exactly one [`Chronograph`]; entries are added
/// via [`Timers::add_timer`] and never implicitly removed. Lookups of
/// absent names fail with [`TimerError::NotFound`] rather than
/// default-inserting. All chronographs read the registry's shared
/// clock, so their marks live on one timeline.
pub struct Timers {
    clock: Arc<dyn ClockSource>,
    timers: HashMap<String, Chronograph>,
}

impl Timers {
    /// Registry with the default monotonic clock and the reserved
    /// [`INTERNAL_TIMER`] already running.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::shared())
    }

    /// Like [`Timers::new`] with an explicit clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn ClockSource>) -> Self {
        let mut timers = Self::bare_with_clock(clock);
        // Fresh map, the reserved name cannot collide.
        let _ = timers.add_timer(INTERNAL_TIMER);
        timers
    }

    /// Registry without the internal bookkeeping timer.
    #[must_use]
    pub fn bare() -> Self {
        Self::bare_with_clock(MonotonicClock::shared())
    }

    /// Like [`Timers::bare`] with an explicit clock.
    #[must_use]
    pub fn bare_with_clock(clock: Arc<dyn ClockSource>) -> Self {
        Self {
            clock,
            timers: HashMap::new(),
        }
    }

    /// Register a new auto-started timer under `name`.
    ///
    /// Duplicate names are refused with [`TimerError::AlreadyExists`]
    /// so an existing history is never silently discarded.
    pub fn add_timer(&mut self, name: &str) -> Result<()> {
        if self.timers.contains_key(name) {
            return Err(TimerError::AlreadyExists(name.to_string()));
        }
        self.timers
            .insert(name.to_string(), Chronograph::new(Arc::clone(&self.clock)));
        Ok(())
    }

    /// Resolve `name`, or fail with [`TimerError::NotFound`].
    pub fn get(&self, name: &str) -> Result<&Chronograph> {
        self.timers
            .get(name)
            .ok_or_else(|| TimerError::NotFound(name.to_string()))
    }

    /// Mutable counterpart of [`Timers::get`].
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Chronograph> {
        self.timers
            .get_mut(name)
            .ok_or_else(|| TimerError::NotFound(name.to_string()))
    }

    /// Start (or restart) the named timer.
    pub fn start(&mut self, name: &str) -> Result<Duration> {
        Ok(self.get_mut(name)?.start())
    }

    /// Stop the named timer with the default note.
    pub fn stop(&mut self, name: &str) -> Result<Duration> {
        self.get_mut(name)?.stop()
    }

    /// Snapshot the named timer's elapsed duration and clear its
    /// running flag.
    pub fn reset(&mut self, name: &str) -> Result<()> {
        self.get_mut(name)?.reset().map(|_| ())
    }

    /// Time since the named timer's start; leaves no mark behind.
    pub fn elapsed(&mut self, name: &str) -> Result<Duration> {
        self.get_mut(name)?.elapsed()
    }

    /// Whether the named timer is running.
    pub fn is_running(&self, name: &str) -> Result<bool> {
        Ok(self.get(name)?.running())
    }

    /// Append a mark to the named timer's history.
    pub fn add_mark(&mut self, name: &str, note: &str) -> Result<Duration> {
        Ok(self.get_mut(name)?.set_mark(note))
    }

    /// Raw mark history of the named timer.
    pub fn mark_list(&self, name: &str) -> Result<&[Mark]> {
        Ok(self.get(name)?.mark_list())
    }

    /// Rendered mark history of the named timer.
    pub fn marks(&self, name: &str, precision: usize) -> Result<Vec<FormattedMark>> {
        Ok(self.get(name)?.marks(precision))
    }

    /// Read-only view of every registered timer.
    #[must_use]
    pub fn timers(&self) -> &HashMap<String, Chronograph> {
        &self.timers
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Timers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timers")
            .field("timers", &self.timers)
            .finish_non_exhaustive()
    }
}
