//! Ordered message severities and their display styles.

use std::fmt;
use std::str::FromStr;

use console::Style;

use crate::error::ConsoleError;

/// Message severity, ordered from most verbose to most silent.
///
/// Discriminants leave room between levels for future insertion. Two
/// sentinels bracket the range: [`LogLevel::All`] admits everything
/// and [`LogLevel::Silent`] suppresses everything, [`LogLevel::Log`]
/// included. [`LogLevel::Quiet`] sits between the two: normal traffic
/// is suppressed but explicit `log` calls still pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum LogLevel {
    /// Threshold sentinel: admit every message.
    All = 1,
    /// Wire-level detail, internal state.
    Trace = 50,
    /// Flow-level diagnostics.
    Debug = 100,
    /// Lifecycle events.
    Info = 200,
    /// Recoverable problems.
    Warning = 300,
    /// Unrecoverable problems.
    Error = 400,
    /// Threshold sentinel: nothing but [`LogLevel::Log`] passes.
    Quiet = 900,
    /// Always emitted, regardless of threshold, except under
    /// [`LogLevel::Silent`].
    Log = 998,
    /// Threshold sentinel: nothing passes, and we are not kidding.
    Silent = 999,
}

impl LogLevel {
    /// Whether a message at this severity passes the given threshold.
    ///
    /// Monotonic in `minimum`: raising the threshold only ever
    /// suppresses more.
    #[must_use]
    pub fn should_emit(self, minimum: LogLevel) -> bool {
        self >= minimum
    }

    /// Style applied when the caller supplies no override.
    #[must_use]
    pub fn style(self) -> Style {
        match self {
            LogLevel::Trace => Style::new().blue(),
            LogLevel::Debug => Style::new().cyan(),
            LogLevel::Info => Style::new().blue().bold(),
            LogLevel::Warning => Style::new().yellow().bold(),
            LogLevel::Error => Style::new().red().on_red().bold(),
            _ => Style::new().white(),
        }
    }

    /// Label the convenience wrappers prefix to their messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Trace => "Trace: ",
            LogLevel::Debug => "Debug: ",
            LogLevel::Info => "Info: ",
            LogLevel::Warning => "Warning: ",
            LogLevel::Error => "Error!: ",
            LogLevel::Log => "Log: ",
            _ => "",
        }
    }

    /// Name used by [`fmt::Display`] and accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::All => "all",
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Quiet => "quiet",
            LogLevel::Log => "log",
            LogLevel::Silent => "silent",
        }
    }

    /// Closest `log` facade filter, for the [`crate::ConsoleLogger`]
    /// adapter. Thresholds above `Error` turn facade traffic off
    /// entirely since the facade has no always-on level.
    #[must_use]
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::All | LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Quiet | LogLevel::Log | LogLevel::Silent => log::LevelFilter::Off,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Trace => LogLevel::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(LogLevel::All),
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "quiet" => Ok(LogLevel::Quiet),
            "log" => Ok(LogLevel::Log),
            "silent" => Ok(LogLevel::Silent),
            other => Err(ConsoleError::UnknownLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REAL_SEVERITIES: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Log,
    ];

    #[test]
    fn test_severity_ordering() {
        assert!(LogLevel::All < LogLevel::Trace);
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Quiet);
        assert!(LogLevel::Quiet < LogLevel::Log);
        assert!(LogLevel::Log < LogLevel::Silent);
    }

    #[test]
    fn test_all_admits_everything() {
        for severity in REAL_SEVERITIES {
            assert!(severity.should_emit(LogLevel::All), "{severity} vs all");
        }
    }

    #[test]
    fn test_quiet_admits_only_log() {
        for severity in REAL_SEVERITIES {
            let expected = severity == LogLevel::Log;
            assert_eq!(severity.should_emit(LogLevel::Quiet), expected);
        }
    }

    #[test]
    fn test_silent_suppresses_even_log() {
        for severity in REAL_SEVERITIES {
            assert!(!severity.should_emit(LogLevel::Silent), "{severity}");
        }
    }

    #[test]
    fn test_should_emit_monotonic_in_threshold() {
        let thresholds = [
            LogLevel::All,
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::Quiet,
            LogLevel::Log,
            LogLevel::Silent,
        ];
        for severity in REAL_SEVERITIES {
            let mut previously_emitted = true;
            for minimum in thresholds {
                let emitted = severity.should_emit(minimum);
                // Raising the threshold never re-admits a severity.
                assert!(previously_emitted || !emitted, "{severity} vs {minimum}");
                previously_emitted = emitted;
            }
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        for severity in REAL_SEVERITIES {
            assert_eq!(severity.as_str().parse::<LogLevel>().unwrap(), severity);
        }
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    }

    #[test]
    fn test_from_str_unknown_level() {
        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert!(matches!(err, ConsoleError::UnknownLevel(name) if name == "loud"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(LogLevel::Warning.label(), "Warning: ");
        assert_eq!(LogLevel::Error.label(), "Error!: ");
        assert_eq!(LogLevel::All.label(), "");
    }

    #[test]
    fn test_log_facade_mapping() {
        assert_eq!(LogLevel::from(log::Level::Warn), LogLevel::Warning);
        assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
        assert_eq!(LogLevel::Silent.to_level_filter(), log::LevelFilter::Off);
    }
}
