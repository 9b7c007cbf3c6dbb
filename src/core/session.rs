use crate::models::{ActiveContext, EventKind, EventRequest, LogRecord, Session};
use tracing::info;

/// Note written on the stop row emitted when a session is closed implicitly.
pub const AUTO_STOP_NOTE: &str = "(auto-stop)";

/// Rows to persist for one user action, plus the state to commit afterwards.
///
/// `auxiliary` (when present) must be written before `primary`.
#[derive(Debug, Clone)]
pub struct ResolvedAction {
    pub auxiliary: Option<LogRecord>,
    pub primary: LogRecord,
    pub new_open_session: Option<Session>,
}

impl ResolvedAction {
    /// Records in write order.
    pub fn records(&self) -> Vec<&LogRecord> {
        self.auxiliary.iter().chain(Some(&self.primary)).collect()
    }
}

/// Holds the (at most one) open session and decides how each event
/// reads and changes it.
///
/// Not thread-safe: owned by the single actor that processes user actions.
#[derive(Debug, Default)]
pub struct SessionTracker {
    open: Option<Session>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently open session, if any, and since when.
    pub fn open_session(&self) -> Option<&Session> {
        self.open.as_ref()
    }

    pub fn has_open_session(&self) -> bool {
        self.open.is_some()
    }

    /// Banner shown before the user decides whether to stop the open session.
    pub fn banner(&self) -> Option<String> {
        self.open
            .as_ref()
            .map(|s| format!("Previous session open • Started {}", s.started_label()))
    }

    /// Work out the rows for `request` against the current state.
    ///
    /// Pure: the tracker is left untouched, callers commit
    /// `new_open_session` once the rows are persisted.
    pub fn resolve(&self, request: &EventRequest, context: &ActiveContext) -> ResolvedAction {
        let mut open = self.open.clone();

        // Step 1: auto-stop the open session if the user asked for it
        let auxiliary = open
            .take_if(|_| request.stop_previous)
            .map(|prev| LogRecord::new(EventKind::Stop, &prev.id, AUTO_STOP_NOTE, "", context));

        // Step 2: target session of the primary row
        let target = match request.event {
            EventKind::Start => {
                let session = Session::begin();
                let id = session.id.clone();
                open = Some(session);
                id
            }
            EventKind::Note => match &open {
                Some(s) => s.id.clone(),
                None if request.promote_note => {
                    let session = Session::begin();
                    let id = session.id.clone();
                    open = Some(session);
                    id
                }
                None => String::new(),
            },
            // An auto-stop above already cleared the session, so the
            // explicit stop is left unattached.
            EventKind::Stop => open.take().map(|s| s.id).unwrap_or_default(),
        };

        let primary = LogRecord::new(
            request.event,
            &target,
            &request.note,
            &request.tags,
            context,
        );

        ResolvedAction {
            auxiliary,
            primary,
            new_open_session: open,
        }
    }

    /// Drop the open session (after an auto-stop row has been persisted).
    pub fn clear(&mut self) {
        if let Some(s) = self.open.take() {
            info!(session_id = %s.id, "session closed");
        }
    }

    /// Adopt the state produced by `resolve`.
    pub fn commit(&mut self, next: Option<Session>) {
        match (&self.open, &next) {
            (Some(old), Some(new)) if old.id == new.id => {}
            (_, Some(new)) => info!(session_id = %new.id, "session opened"),
            (Some(old), None) => info!(session_id = %old.id, "session closed"),
            (None, None) => {}
        }
        self.open = next;
    }
}
