//! Console error types.

use std::io;

/// Errors surfaced by console operations.
///
/// Sink failures propagate to the calling emit operation; diagnostics
/// tooling must not swallow its own I/O errors.
#[derive(Debug)]
pub enum ConsoleError {
    /// Severity name not recognized.
    UnknownLevel(String),
    /// The sink refused the rendered line.
    Io(io::Error),
    /// The dump payload could not be serialized.
    Dump(serde_json::Error),
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleError::UnknownLevel(name) => write!(f, "unknown log level {name:?}"),
            ConsoleError::Io(e) => write!(f, "console I/O error: {e}"),
            ConsoleError::Dump(e) => write!(f, "dump serialization error: {e}"),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::UnknownLevel(_) => None,
            ConsoleError::Io(e) => Some(e),
            ConsoleError::Dump(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        ConsoleError::Io(err)
    }
}
