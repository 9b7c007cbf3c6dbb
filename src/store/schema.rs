/// Record layout revision written into every row.
pub const SCHEMA_VERSION: u32 = 1;

/// Column names, in file order.
pub const HEADERS: [&str; 10] = [
    "log_id",
    "timestamp",
    "event",
    "session_id",
    "action_note",
    "tags",
    "app_name",
    "window_title",
    "url",
    "schema_version",
];
