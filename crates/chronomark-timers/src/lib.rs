#![forbid(unsafe_code)]

//! Named interval timers with an append-only mark history.
//!
//! A [`Chronograph`] is a single timer: a start origin, a running flag,
//! and the ordered history of timestamped notes ("marks") recorded over
//! its life. A [`Timers`] registry owns any number of chronographs keyed
//! by name and sharing one monotonic clock.
//!
//! Clock reads go through the [`ClockSource`] trait so tests can drive
//! time by hand with [`ManualClock`] instead of sleeping.
//!
//! # Example
//!
//! ```
//! use chronomark_timers::Timers;
//!
//! let mut timers = Timers::new();
//! timers.add_timer("build").unwrap();
//! // ... work ...
//! let took = timers.elapsed("build").unwrap();
//! println!("build took {took:?}");
//! ```

mod chronograph;
mod clock;
mod error;
mod registry;

pub use chronograph::{
    CHRONO_DEFAULT_PRECISION, Chronograph, FormattedMark, Mark, STARTED_NOTE, STOPPED_NOTE,
};
pub use clock::{ClockSource, ManualClock, MonotonicClock};
pub use error::{Result, TimerError};
pub use registry::{INTERNAL_TIMER, Timers};
