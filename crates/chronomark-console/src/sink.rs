//! Output collaborators: where rendered lines go.

use std::io::{self, Write};

use console::{Style, Term};

/// Receives fully formatted lines plus the chosen style token.
///
/// The emitter never touches ANSI escapes itself; it picks a style and
/// hands both to the sink, which decides how (or whether) to apply it.
pub trait RenderSink: Send {
    /// Write one line, applying `style` when the sink supports it.
    fn render_line(&mut self, line: &str, style: Option<&Style>) -> io::Result<()>;

    /// Write raw text with no styling and no newline handling.
    fn write_raw(&mut self, text: &str) -> io::Result<()>;
}

/// Terminal sink writing styled lines via the `console` crate.
pub struct TermSink {
    term: Term,
}

impl TermSink {
    /// Sink writing to stderr, the conventional diagnostics stream.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Sink writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl RenderSink for TermSink {
    fn render_line(&mut self, line: &str, style: Option<&Style>) -> io::Result<()> {
        match style {
            Some(style) if self.term.features().colors_supported() => {
                self.term.write_line(&style.apply_to(line).to_string())
            }
            _ => self.term.write_line(line),
        }
    }

    fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.term.write_all(text.as_bytes())?;
        self.term.flush()
    }
}
