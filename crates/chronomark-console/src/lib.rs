#![forbid(unsafe_code)]

//! Leveled, timestamped, styled console output.
//!
//! The [`Console`] emitter is the single pipeline for diagnostic
//! output: each message is filtered against a severity threshold,
//! prefixed with a deduplicated timestamp, styled per severity, and
//! handed to a [`RenderSink`] for rendering. The emitter owns its
//! threshold; startup code configures it once through
//! [`Console::set_level`] and nothing else mutates it.
//!
//! # Example
//!
//! ```no_run
//! use chronomark_console::{Console, LogLevel};
//!
//! let mut console = Console::new();
//! console.set_level(LogLevel::Info);
//! console.info("server started").unwrap();
//! console.debug("not visible at this level").unwrap();
//! ```

pub mod emitter;
pub mod level;
pub mod logging;
pub mod sink;
pub mod testing;
pub mod timestamp;

mod error;

pub use emitter::{Console, ConsoleBuilder};
pub use error::ConsoleError;
pub use level::LogLevel;
pub use logging::ConsoleLogger;
pub use sink::{RenderSink, TermSink};
pub use timestamp::TimestampFormatter;
