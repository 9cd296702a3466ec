use chrono::{DateTime, Utc};

/// Short date-and-time label for a saved timestamp, e.g.
/// "Jan 15, 2024, 10:30 AM".
#[must_use]
pub fn format_saved_date(saved: &DateTime<Utc>) -> String {
    saved.format("%b %-d, %Y, %I:%M %p").to_string()
}
