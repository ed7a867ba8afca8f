//! The leveled console emitter.

use console::Style;
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::ConsoleError;
use crate::level::LogLevel;
use crate::sink::{RenderSink, TermSink};
use crate::timestamp::TimestampFormatter;

/// Leveled, timestamped, styled console output.
///
/// One instance owns the whole emit pipeline: the severity threshold,
/// the timestamp dedup state, and the sink lines are rendered to. The
/// threshold is the single source of truth for verbosity; startup code
/// feeds it through [`Console::set_level`] and nothing else mutates it.
pub struct Console {
    sink: Box<dyn RenderSink>,
    minimum: LogLevel,
    timestamps: Option<TimestampFormatter>,
    prefix: bool,
    color: bool,
}

impl Console {
    /// Emitter with the default stderr sink, admitting everything.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    /// Current severity threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.minimum
    }

    /// The only entry point for changing verbosity.
    pub fn set_level(&mut self, level: LogLevel) {
        self.minimum = level;
    }

    /// Toggle the `"Warning: "`-style labels on the convenience
    /// wrappers.
    pub fn set_prefix(&mut self, prefix: bool) {
        self.prefix = prefix;
    }

    // ─────────────────────────────────────────────────
    // Core Pipeline
    // ─────────────────────────────────────────────────

    /// Filter, format, and render one line.
    ///
    /// Suppressed messages produce no output and leave the timestamp
    /// dedup bucket untouched, so skipped traffic cannot blank out the
    /// timestamp of the next visible line. Sink failures propagate.
    pub fn print(
        &mut self,
        message: &str,
        level: LogLevel,
        style: Option<Style>,
        force_timestamp: bool,
    ) -> Result<(), ConsoleError> {
        self.print_at(
            message,
            level,
            style,
            force_timestamp,
            OffsetDateTime::now_utc(),
        )
    }

    /// Like [`Console::print`] with an explicit wall-clock reading.
    pub fn print_at(
        &mut self,
        message: &str,
        level: LogLevel,
        style: Option<Style>,
        force_timestamp: bool,
        now: OffsetDateTime,
    ) -> Result<(), ConsoleError> {
        if !level.should_emit(self.minimum) {
            return Ok(());
        }

        let style = if self.color {
            Some(style.unwrap_or_else(|| level.style()))
        } else {
            None
        };

        let line = match self.timestamps.as_mut() {
            Some(timestamps) => {
                format!("{} {message}", timestamps.format(now, force_timestamp))
            }
            None => message.to_string(),
        };

        self.sink.render_line(&line, style.as_ref())?;
        Ok(())
    }

    fn leveled(
        &mut self,
        level: LogLevel,
        message: &str,
        force_timestamp: bool,
    ) -> Result<(), ConsoleError> {
        if self.prefix {
            let labeled = format!("{}{message}", level.label());
            self.print(&labeled, level, None, force_timestamp)
        } else {
            self.print(message, level, None, force_timestamp)
        }
    }

    // ─────────────────────────────────────────────────
    // Convenience Wrappers
    // ─────────────────────────────────────────────────

    /// Trace-level message; always carries a real timestamp.
    pub fn trace(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.leveled(LogLevel::Trace, message, true)
    }

    pub fn debug(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.leveled(LogLevel::Debug, message, false)
    }

    pub fn info(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.leveled(LogLevel::Info, message, false)
    }

    pub fn warning(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.leveled(LogLevel::Warning, message, false)
    }

    /// Error-level message; always carries a real timestamp.
    pub fn error(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.leveled(LogLevel::Error, message, true)
    }

    /// Always emitted unless the threshold is [`LogLevel::Silent`].
    pub fn log(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.leveled(LogLevel::Log, message, false)
    }

    // ─────────────────────────────────────────────────
    // Raw Output
    // ─────────────────────────────────────────────────

    /// Unfiltered raw write: no threshold, no timestamp, no styling.
    pub fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.sink.write_raw(text)?;
        Ok(())
    }

    /// Emit `count` blank lines.
    pub fn blank(&mut self, count: usize) -> Result<(), ConsoleError> {
        self.write(&"\n".repeat(count))
    }

    /// Pretty-print a structured value under a styled header.
    ///
    /// Suppressed only when the threshold is fully silent.
    pub fn dump<T: Serialize>(&mut self, value: &T) -> Result<(), ConsoleError> {
        if self.minimum >= LogLevel::Silent {
            return Ok(());
        }
        let header_style = (self.color).then(|| Style::new().black().on_red());
        self.sink
            .render_line("   Dumping data:   ", header_style.as_ref())?;
        let rendered = serde_json::to_string_pretty(value).map_err(ConsoleError::Dump)?;
        self.sink.render_line(&rendered, None)?;
        self.blank(1)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a [`Console`].
pub struct ConsoleBuilder {
    sink: Option<Box<dyn RenderSink>>,
    minimum: LogLevel,
    timestamps: bool,
    prefix: bool,
    color: bool,
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: None,
            minimum: LogLevel::All,
            timestamps: true,
            prefix: true,
            color: true,
        }
    }

    /// Replace the default stderr sink.
    #[must_use]
    pub fn sink(mut self, sink: impl RenderSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Set the initial severity threshold.
    #[must_use]
    pub fn minimum_level(mut self, level: LogLevel) -> Self {
        self.minimum = level;
        self
    }

    /// Enable or disable timestamp prefixes entirely.
    #[must_use]
    pub fn with_timestamps(mut self, on: bool) -> Self {
        self.timestamps = on;
        self
    }

    /// Enable or disable `"Warning: "`-style labels.
    #[must_use]
    pub fn with_prefix(mut self, on: bool) -> Self {
        self.prefix = on;
        self
    }

    /// Enable or disable style tokens altogether.
    #[must_use]
    pub fn with_color(mut self, on: bool) -> Self {
        self.color = on;
        self
    }

    #[must_use]
    pub fn build(self) -> Console {
        Console {
            sink: self
                .sink
                .unwrap_or_else(|| Box::new(TermSink::stderr())),
            minimum: self.minimum,
            timestamps: self.timestamps.then(TimestampFormatter::new),
            prefix: self.prefix,
            color: self.color,
        }
    }
}
