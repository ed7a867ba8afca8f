//! Startup verbosity: maps process flags and the environment to the
//! emitter's initial severity threshold.
//!
//! This is the single producer of the threshold consumed by
//! [`chronomark_console::Console::set_level`]; nothing else should
//! mutate verbosity at runtime.

use std::env;
use std::str::FromStr;

use chronomark_console::LogLevel;

/// Environment variable consulted when no flag is present.
pub const LOG_ENV_VAR: &str = "CHRONOMARK_LOG";

/// Threshold used when neither flags nor environment ask for more.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Error;

/// Resolve the initial threshold from an argument list.
///
/// `-t`/`--trace` wins over `-d`/`--debug` regardless of order; with
/// neither flag the [`LOG_ENV_VAR`] environment variable is consulted,
/// falling back to [`DEFAULT_LEVEL`]. Unknown arguments are ignored,
/// they belong to the application.
pub fn initial_level<I, S>(args: I) -> LogLevel
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut debug = false;
    for arg in args {
        match arg.as_ref() {
            "-t" | "--trace" => return LogLevel::Trace,
            "-d" | "--debug" => debug = true,
            _ => {}
        }
    }
    if debug {
        return LogLevel::Debug;
    }
    from_env().unwrap_or(DEFAULT_LEVEL)
}

/// Resolve the initial threshold from the process arguments.
#[must_use]
pub fn from_args() -> LogLevel {
    initial_level(env::args().skip(1))
}

/// Threshold from [`LOG_ENV_VAR`], when set and parseable.
#[must_use]
pub fn from_env() -> Option<LogLevel> {
    env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| LogLevel::from_str(&value).ok())
}
