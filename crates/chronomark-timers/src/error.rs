//! Timer error types.

/// Errors surfaced by [`crate::Timers`] and [`crate::Chronograph`]
/// operations.
///
/// All variants are caller errors and are reported synchronously. An
/// unset start time never silently produces a zero duration, and an
/// unknown timer name never silently creates a timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// No timer is registered under the given name.
    NotFound(String),
    /// Elapsed, stop, or reset was called before the timer was started.
    NotStarted,
    /// `add_timer` would overwrite an existing timer's history.
    AlreadyExists(String),
}

impl std::fmt::Display for TimerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimerError::NotFound(name) => write!(f, "no timer named {name:?}"),
            TimerError::NotStarted => write!(f, "timer has not been started"),
            TimerError::AlreadyExists(name) => {
                write!(f, "timer {name:?} already exists")
            }
        }
    }
}

impl std::error::Error for TimerError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimerError>;
