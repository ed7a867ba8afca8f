//! A single timer and its append-only mark history.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::clock::ClockSource;
use crate::error::{Result, TimerError};

/// Note recorded when a chronograph starts.
pub const STARTED_NOTE: &str = "started";
/// Note recorded when a chronograph stops.
pub const STOPPED_NOTE: &str = "stopped";
/// Significant digits used for mark timestamps when callers have no
/// stronger opinion.
pub const CHRONO_DEFAULT_PRECISION: usize = 5;

/// Placeholder note carried by an elapsed probe until it is either
/// relabeled or discarded.
const ELAPSED_PROBE_NOTE: &str = "_elapsed_";

/// A timestamped note in a chronograph's history.
///
/// Immutable once appended, with one documented exception: a
/// checkpoint relabels the probe mark it just pushed (see
/// [`Chronograph::checkpoint`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mark {
    /// Monotonic reading at which the mark was recorded.
    pub at: Duration,
    /// Free-form note.
    pub note: String,
}

/// A mark rendered for display, its timestamp reduced to a fixed number
/// of significant digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMark {
    /// Timestamp in seconds, rendered to the requested precision.
    pub at: String,
    /// Free-form note.
    pub note: String,
}

/// A single named timer: a start origin, a running flag, and the
/// ordered history of everything that happened to it.
///
/// The mark history is the audit trail of the timer's life; insertion
/// order is significant and marks are never reordered or rewritten.
/// Every instance owns its own history.
pub struct Chronograph {
    clock: Arc<dyn ClockSource>,
    marks: Vec<Mark>,
    start_time: Option<Duration>,
    last_elapsed: Duration,
    is_running: bool,
}

impl Chronograph {
    /// Create and immediately start, recording a [`STARTED_NOTE`] mark.
    #[must_use]
    pub fn new(clock: Arc<dyn ClockSource>) -> Self {
        let mut chrono = Self::unstarted(clock);
        chrono.start();
        chrono
    }

    /// Create idle: no marks, no start origin, not running.
    #[must_use]
    pub fn unstarted(clock: Arc<dyn ClockSource>) -> Self {
        Self {
            clock,
            marks: Vec::new(),
            start_time: None,
            last_elapsed: Duration::ZERO,
            is_running: false,
        }
    }

    /// Start (or restart) the timer, returning the recorded instant.
    ///
    /// Restarting appends a fresh [`STARTED_NOTE`] mark and abandons
    /// the previous origin; earlier marks stay in the history.
    pub fn start(&mut self) -> Duration {
        let at = self.set_mark(STARTED_NOTE);
        self.start_time = Some(at);
        self.is_running = true;
        at
    }

    /// Whether the timer is currently running.
    #[must_use]
    pub fn running(&self) -> bool {
        self.is_running
    }

    /// The origin measured against by elapsed computations, if any.
    #[must_use]
    pub fn start_time(&self) -> Option<Duration> {
        self.start_time
    }

    /// The most recently computed elapsed duration.
    #[must_use]
    pub fn last_elapsed(&self) -> Duration {
        self.last_elapsed
    }

    /// Append a mark at the clock's current reading. Returns the
    /// recorded instant. Always succeeds.
    pub fn set_mark(&mut self, note: &str) -> Duration {
        let at = self.clock.now();
        self.set_mark_at(note, at)
    }

    /// Append a mark at an explicit reading.
    pub fn set_mark_at(&mut self, note: &str, at: Duration) -> Duration {
        self.marks.push(Mark {
            at,
            note: note.to_string(),
        });
        at
    }

    /// Measure time since start without touching the history.
    ///
    /// The probe mark used for the measurement is discarded, so
    /// throwaway measurements leave no residue in the audit trail.
    pub fn elapsed(&mut self) -> Result<Duration> {
        self.checkpoint("")
    }

    /// Measure time since start, keeping the probe mark in the history
    /// under `note` as a durable checkpoint.
    ///
    /// An empty `note` behaves like [`Chronograph::elapsed`]: the probe
    /// is discarded. Fails with [`TimerError::NotStarted`] before any
    /// [`Chronograph::start`].
    pub fn checkpoint(&mut self, note: &str) -> Result<Duration> {
        let start = self.start_time.ok_or(TimerError::NotStarted)?;
        let at = self.set_mark(ELAPSED_PROBE_NOTE);
        self.last_elapsed = at.saturating_sub(start);
        if note.is_empty() {
            self.marks.pop();
        } else if let Some(probe) = self.marks.last_mut() {
            probe.note = note.to_string();
        }
        Ok(self.last_elapsed)
    }

    /// Stop the timer with a [`STOPPED_NOTE`] mark.
    pub fn stop(&mut self) -> Result<Duration> {
        self.stop_with(STOPPED_NOTE)
    }

    /// Stop the timer, recording `note`.
    ///
    /// The start origin is kept: a later elapsed call still measures
    /// from the original start. That is intended behavior, not an
    /// oversight. Fails with [`TimerError::NotStarted`] before any
    /// start.
    pub fn stop_with(&mut self, note: &str) -> Result<Duration> {
        if self.start_time.is_none() {
            return Err(TimerError::NotStarted);
        }
        let at = self.set_mark(note);
        self.is_running = false;
        Ok(at)
    }

    /// Snapshot the elapsed duration and clear the running flag.
    ///
    /// The start origin and the mark history survive; reset is an
    /// elapsed snapshot plus a flag clear, not a wipe. Returns the
    /// chronograph itself so calls can chain.
    pub fn reset(&mut self) -> Result<&mut Self> {
        let start = self.start_time.ok_or(TimerError::NotStarted)?;
        self.last_elapsed = self.clock.now().saturating_sub(start);
        self.is_running = false;
        Ok(self)
    }

    /// Raw mark history, in insertion order.
    #[must_use]
    pub fn mark_list(&self) -> &[Mark] {
        &self.marks
    }

    /// History rendered for display, timestamps reduced to `precision`
    /// significant digits. Stored marks are untouched.
    #[must_use]
    pub fn marks(&self, precision: usize) -> Vec<FormattedMark> {
        self.marks
            .iter()
            .map(|mark| FormattedMark {
                at: format_significant(mark.at.as_secs_f64(), precision),
                note: mark.note.clone(),
            })
            .collect()
    }
}

impl fmt::Debug for Chronograph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chronograph")
            .field("marks", &self.marks)
            .field("start_time", &self.start_time)
            .field("last_elapsed", &self.last_elapsed)
            .field("is_running", &self.is_running)
            .finish_non_exhaustive()
    }
}

/// Render `secs` to `precision` significant digits.
fn format_significant(secs: f64, precision: usize) -> String {
    if precision == 0 || secs == 0.0 {
        return format!("{secs}");
    }
    let magnitude = secs.abs().log10().floor() as i64;
    let decimals = (precision as i64 - 1 - magnitude).max(0) as usize;
    format!("{secs:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn manual() -> (Arc<ManualClock>, Chronograph) {
        let clock = Arc::new(ManualClock::new());
        let chrono = Chronograph::unstarted(clock.clone());
        (clock, chrono)
    }

    #[test]
    fn test_unstarted_has_no_history() {
        let (_, chrono) = manual();
        assert!(chrono.mark_list().is_empty());
        assert!(!chrono.running());
        assert_eq!(chrono.start_time(), None);
    }

    #[test]
    fn test_new_auto_starts() {
        let clock = Arc::new(ManualClock::new());
        let chrono = Chronograph::new(clock);
        assert!(chrono.running());
        assert_eq!(chrono.start_time(), Some(Duration::ZERO));
        assert_eq!(chrono.mark_list().len(), 1);
        assert_eq!(chrono.mark_list()[0].note, STARTED_NOTE);
    }

    #[test]
    fn test_elapsed_before_start_fails() {
        let (_, mut chrono) = manual();
        assert_eq!(chrono.elapsed(), Err(TimerError::NotStarted));
    }

    #[test]
    fn test_stop_before_start_fails() {
        let (_, mut chrono) = manual();
        assert_eq!(chrono.stop(), Err(TimerError::NotStarted));
    }

    #[test]
    fn test_reset_before_start_fails() {
        let (_, mut chrono) = manual();
        assert!(chrono.reset().is_err());
    }

    #[test]
    fn test_elapsed_measures_from_start() {
        let (clock, mut chrono) = manual();
        chrono.start();
        clock.advance(Duration::from_secs(2));
        assert_eq!(chrono.elapsed(), Ok(Duration::from_secs(2)));
        assert_eq!(chrono.last_elapsed(), Duration::from_secs(2));
    }

    #[test]
    fn test_ephemeral_elapsed_leaves_no_mark() {
        let (clock, mut chrono) = manual();
        chrono.start();
        clock.advance(Duration::from_secs(1));
        chrono.elapsed().unwrap();
        chrono.elapsed().unwrap();
        assert_eq!(chrono.mark_list().len(), 1); // only "started"
    }

    #[test]
    fn test_checkpoint_keeps_relabeled_probe() {
        let (clock, mut chrono) = manual();
        chrono.start();
        clock.advance(Duration::from_secs(2));
        let took = chrono.checkpoint("checkpoint").unwrap();
        assert_eq!(took, Duration::from_secs(2));
        let notes: Vec<&str> = chrono.mark_list().iter().map(|m| m.note.as_str()).collect();
        assert_eq!(notes, vec![STARTED_NOTE, "checkpoint"]);
    }

    #[test]
    fn test_stop_keeps_start_origin() {
        let (clock, mut chrono) = manual();
        chrono.start();
        clock.advance(Duration::from_secs(1));
        chrono.stop().unwrap();
        assert!(!chrono.running());
        clock.advance(Duration::from_secs(1));
        // Still measured from the original start.
        assert_eq!(chrono.elapsed(), Ok(Duration::from_secs(2)));
    }

    #[test]
    fn test_restart_abandons_previous_origin() {
        let (clock, mut chrono) = manual();
        chrono.start();
        clock.advance(Duration::from_secs(5));
        chrono.start();
        clock.advance(Duration::from_secs(1));
        assert_eq!(chrono.elapsed(), Ok(Duration::from_secs(1)));
        // Both start marks survive in the history.
        let starts = chrono
            .mark_list()
            .iter()
            .filter(|m| m.note == STARTED_NOTE)
            .count();
        assert_eq!(starts, 2);
    }

    #[test]
    fn test_reset_snapshots_and_clears_running() {
        let (clock, mut chrono) = manual();
        chrono.start();
        clock.advance(Duration::from_secs(3));
        chrono.reset().unwrap();
        assert!(!chrono.running());
        assert_eq!(chrono.last_elapsed(), Duration::from_secs(3));
        // Non-destructive: origin and history survive.
        assert_eq!(chrono.start_time(), Some(Duration::ZERO));
        assert_eq!(chrono.mark_list().len(), 1);
    }

    #[test]
    fn test_reset_chains() {
        let (_, mut chrono) = manual();
        chrono.start();
        let at = chrono.reset().unwrap().start();
        assert_eq!(at, Duration::ZERO);
    }

    #[test]
    fn test_mark_count_accounting() {
        let (clock, mut chrono) = manual();
        chrono.start(); // 1
        chrono.set_mark("a"); // 2
        chrono.set_mark("b"); // 3
        clock.advance(Duration::from_secs(1));
        chrono.elapsed().unwrap(); // still 3
        chrono.checkpoint("c").unwrap(); // 4
        chrono.stop().unwrap(); // 5
        assert_eq!(chrono.mark_list().len(), 5);
    }

    #[test]
    fn test_marks_formats_significant_digits() {
        let (_, mut chrono) = manual();
        chrono.set_mark_at("a", Duration::from_secs_f64(123.456_789));
        chrono.set_mark_at("b", Duration::from_secs_f64(0.001_234_5));
        let formatted = chrono.marks(5);
        assert_eq!(formatted[0].at, "123.46");
        assert_eq!(formatted[1].at, "0.0012345");
        assert_eq!(formatted[0].note, "a");
    }

    #[test]
    fn test_format_significant_edge_cases() {
        assert_eq!(format_significant(0.0, 5), "0");
        assert_eq!(format_significant(2.0, 3), "2.00");
        assert_eq!(format_significant(12345.6, 3), "12346");
    }

    #[test]
    fn test_mark_serializes() {
        let mark = Mark {
            at: Duration::from_secs(1),
            note: "a".to_string(),
        };
        let json = serde_json::to_string(&mark).unwrap();
        assert!(json.contains("\"note\":\"a\""));
    }
}
