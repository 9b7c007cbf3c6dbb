//! Time utilities: log timestamps.

use chrono::{DateTime, Local, SecondsFormat};

/// Current local time as RFC 3339 with a numeric offset and second
/// precision, e.g. `2024-01-15T14:30:00-05:00`.
pub fn iso_now() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp(dt: &DateTime<Local>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
}
