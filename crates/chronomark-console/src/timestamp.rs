//! Timestamp rendering with minute-level deduplication.
//!
//! Repeated messages within the same minute would otherwise stack
//! identical timestamps down the left margin. The formatter renders a
//! real timestamp once per minute bucket and pads the rest with spaces
//! of equal width so columns stay aligned.

use time::OffsetDateTime;
use time::macros::format_description;

/// Rendered width of the timestamp format (`yy-mm-dd HH:MM`).
pub const TIMESTAMP_WIDTH: usize = 14;

/// Stateful timestamp renderer.
///
/// The dedup bucket is minute-of-hour only, so two calls exactly an
/// hour apart collide on the same bucket value and the second one is
/// blanked. Known limitation, kept for stable visual behavior.
#[derive(Debug, Clone, Default)]
pub struct TimestampFormatter {
    last_minute: Option<u8>,
}

impl TimestampFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the timestamp for `now`, or same-width space padding
    /// when the minute bucket has not changed since the previous call.
    ///
    /// `force` always renders. The bucket is updated on every call,
    /// rendered or not.
    pub fn format(&mut self, now: OffsetDateTime, force: bool) -> String {
        let minute = now.minute();
        let repeated = self.last_minute == Some(minute);
        self.last_minute = Some(minute);

        let rendered = render(now);
        if repeated && !force {
            " ".repeat(rendered.chars().count())
        } else {
            rendered
        }
    }
}

fn render(now: OffsetDateTime) -> String {
    let format = format_description!("[year repr:last_two]-[month]-[day] [hour]:[minute]");
    now.format(format)
        .unwrap_or_else(|_| " ".repeat(TIMESTAMP_WIDTH))
}
