#![forbid(unsafe_code)]

//! Developer diagnostics toolkit: named interval timers plus a leveled
//! console emitter.
//!
//! This crate is the facade; the pieces live in:
//! - [`chronomark_timers`]: [`Timers`], [`Chronograph`], clock sources
//! - [`chronomark_console`]: [`Console`], [`LogLevel`], sinks
//!
//! # Quick start
//!
//! ```no_run
//! use chronomark::{Console, Timers, verbosity};
//!
//! let mut console = Console::new();
//! console.set_level(verbosity::from_args());
//!
//! let mut timers = Timers::new();
//! timers.add_timer("startup").unwrap();
//! // ... work ...
//! let took = timers.elapsed("startup").unwrap();
//! console.info(&format!("startup took {took:?}")).unwrap();
//! ```

pub mod verbosity;

pub use chronomark_console::{
    Console, ConsoleBuilder, ConsoleError, ConsoleLogger, LogLevel, RenderSink, TermSink,
    TimestampFormatter,
};
pub use chronomark_timers::{
    CHRONO_DEFAULT_PRECISION, Chronograph, ClockSource, FormattedMark, INTERNAL_TIMER, ManualClock,
    Mark, MonotonicClock, TimerError, Timers,
};

// Re-export log macros so downstream code can route through the
// ConsoleLogger adapter without importing the facade crate itself.
pub use log::{debug, error, info, trace, warn};
