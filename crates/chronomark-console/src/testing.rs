//! Test utilities: a sink that captures rendered lines.
//!
//! `CaptureSink` is cheaply cloneable; hand one clone to a
//! [`crate::Console`] and keep another to assert on what was rendered.

use std::io;
use std::sync::{Arc, Mutex};

use console::Style;

use crate::sink::RenderSink;

/// One captured call to [`RenderSink::render_line`].
#[derive(Debug, Clone)]
pub struct CapturedLine {
    /// The formatted line, timestamp prefix included.
    pub text: String,
    /// The style token the emitter chose, if any.
    pub style: Option<Style>,
}

#[derive(Debug, Default)]
struct Captured {
    lines: Vec<CapturedLine>,
    raw: String,
}

/// In-memory sink recording every rendered line for assertions.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    inner: Arc<Mutex<Captured>>,
}

impl CaptureSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, in render order.
    #[must_use]
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.inner.lock().map(|c| c.lines.clone()).unwrap_or_default()
    }

    /// Captured line texts joined with newlines.
    #[must_use]
    pub fn output(&self) -> String {
        self.lines()
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Everything written through [`RenderSink::write_raw`].
    #[must_use]
    pub fn raw(&self) -> String {
        self.inner.lock().map(|c| c.raw.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    /// Panic unless some captured line contains `needle`.
    pub fn assert_contains(&self, needle: &str) {
        let output = self.output();
        assert!(
            output.contains(needle),
            "expected console output to contain {needle:?}, got:\n{output}"
        );
    }
}

impl RenderSink for CaptureSink {
    fn render_line(&mut self, line: &str, style: Option<&Style>) -> io::Result<()> {
        if let Ok(mut captured) = self.inner.lock() {
            captured.lines.push(CapturedLine {
                text: line.to_string(),
                style: style.cloned(),
            });
        }
        Ok(())
    }

    fn write_raw(&mut self, text: &str) -> io::Result<()> {
        if let Ok(mut captured) = self.inner.lock() {
            captured.raw.push_str(text);
        }
        Ok(())
    }
}

/// Sink whose writes always fail; for exercising error propagation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSink;

impl RenderSink for FailingSink {
    fn render_line(&mut self, _line: &str, _style: Option<&Style>) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn write_raw(&mut self, _text: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}
