//! `log` facade adapter.
//!
//! Routes records from the standard [`log`] macros through a
//! [`Console`], so library code using `log::info!` and friends shares
//! the emitter's threshold, timestamps, and styling.

use std::sync::Mutex;

use log::{Metadata, Record, SetLoggerError};

use crate::emitter::Console;
use crate::level::LogLevel;

/// [`log::Log`] implementation backed by a [`Console`].
///
/// The console sits behind a mutex because the facade requires `Sync`;
/// that also serializes the timestamp dedup state.
pub struct ConsoleLogger {
    console: Mutex<Console>,
}

impl ConsoleLogger {
    #[must_use]
    pub fn new(console: Console) -> Self {
        Self {
            console: Mutex::new(console),
        }
    }

    /// Install as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(console: Console) -> Result<(), SetLoggerError> {
        let max = console.level().to_level_filter();
        log::set_boxed_logger(Box::new(Self::new(console)))?;
        log::set_max_level(max);
        Ok(())
    }

    /// Install as the global logger, ignoring errors if already set.
    pub fn try_init(console: Console) {
        let _ = Self::init(console);
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let severity = LogLevel::from(metadata.level());
        self.console
            .lock()
            .map(|console| severity.should_emit(console.level()))
            .unwrap_or(false)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        if let Ok(mut console) = self.console.lock() {
            // The facade offers no error channel; sink failures stop here.
            let _ = match LogLevel::from(record.level()) {
                LogLevel::Error => console.error(&message),
                LogLevel::Warning => console.warning(&message),
                LogLevel::Debug => console.debug(&message),
                LogLevel::Trace => console.trace(&message),
                _ => console.info(&message),
            };
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CaptureSink;
    use log::Log;

    fn logger_with_capture(level: LogLevel) -> (ConsoleLogger, CaptureSink) {
        let sink = CaptureSink::new();
        let console = Console::builder()
            .sink(sink.clone())
            .minimum_level(level)
            .build();
        (ConsoleLogger::new(console), sink)
    }

    #[test]
    fn test_enabled_respects_console_threshold() {
        let (logger, _) = logger_with_capture(LogLevel::Warning);
        let warn = log::Metadata::builder()
            .level(log::Level::Warn)
            .target("t")
            .build();
        let info = log::Metadata::builder()
            .level(log::Level::Info)
            .target("t")
            .build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }

    #[test]
    fn test_record_routed_through_console() {
        let (logger, sink) = logger_with_capture(LogLevel::All);
        logger.log(
            &Record::builder()
                .args(format_args!("hello"))
                .level(log::Level::Warn)
                .target("t")
                .build(),
        );
        sink.assert_contains("Warning: hello");
    }

    #[test]
    fn test_suppressed_record_renders_nothing() {
        let (logger, sink) = logger_with_capture(LogLevel::Error);
        logger.log(
            &Record::builder()
                .args(format_args!("chatty"))
                .level(log::Level::Debug)
                .target("t")
                .build(),
        );
        assert!(sink.is_empty());
    }
}
