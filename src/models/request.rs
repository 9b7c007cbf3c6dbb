use super::event_kind::EventKind;
use tracing::warn;

/// A user-confirmed action, as collected by the dialog or the `log` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRequest {
    pub event: EventKind,
    /// Close the currently open session first (ignored when none is open).
    pub stop_previous: bool,
    /// Turn a standalone note into a new session (only for `note` with no open session).
    pub promote_note: bool,
    pub note: String,
    pub tags: String,
}

impl EventRequest {
    pub fn new(
        event: EventKind,
        stop_previous: bool,
        promote_note: bool,
        note: &str,
        tags: &str,
    ) -> Self {
        Self {
            event,
            stop_previous,
            promote_note,
            note: note.trim().to_string(),
            tags: tags.trim().to_string(),
        }
    }

    /// Build a request from a raw event value.
    ///
    /// Anything other than `start`, `note` or `stop` is recorded as a plain
    /// note and is never promoted to a session.
    pub fn from_input(
        event: &str,
        stop_previous: bool,
        promote_note: bool,
        note: &str,
        tags: &str,
    ) -> Self {
        let (kind, promote_note) = match EventKind::parse(event) {
            Some(kind) => (kind, promote_note),
            None => {
                warn!(value = %event, "unknown event value, recording it as a note");
                (EventKind::Note, false)
            }
        };
        Self::new(kind, stop_previous, promote_note, note, tags)
    }
}
