use super::context::ActiveContext;
use super::event_kind::EventKind;
use crate::store::schema::SCHEMA_VERSION;
use crate::utils::time::iso_now;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the log store.
///
/// Field order is the column order of the CSV file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogRecord {
    pub log_id: String,
    pub timestamp: String,
    pub event: EventKind,
    pub session_id: String,
    #[serde(rename = "action_note")]
    pub note: String,
    pub tags: String,
    pub app_name: String,
    pub window_title: String,
    pub url: String,
    pub schema_version: u32,
}

impl LogRecord {
    /// Build a record stamped with a fresh `log_id` and the current time.
    /// An empty `session_id` means the record is not attached to a session.
    pub fn new(
        event: EventKind,
        session_id: &str,
        note: &str,
        tags: &str,
        context: &ActiveContext,
    ) -> Self {
        Self {
            log_id: Uuid::new_v4().to_string(),
            timestamp: iso_now(),
            event,
            session_id: session_id.to_string(),
            note: note.to_string(),
            tags: tags.to_string(),
            app_name: context.app_name.clone(),
            window_title: context.window_title.clone(),
            url: String::new(),
            schema_version: SCHEMA_VERSION,
        }
    }

    pub fn is_attached(&self) -> bool {
        !self.session_id.is_empty()
    }
}
