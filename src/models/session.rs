use chrono::{DateTime, Local};
use uuid::Uuid;

/// The single open work session held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub started_at: DateTime<Local>,
}

impl Session {
    /// Open a brand-new session with a fresh id, started now.
    pub fn begin() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: Local::now(),
        }
    }

    /// Start time as a 12-hour clock label, e.g. `2:30 PM`.
    pub fn started_label(&self) -> String {
        self.started_at.format("%-I:%M %p").to_string()
    }
}
