use crate::core::session::SessionTracker;
use crate::errors::AppResult;
use crate::models::{ActiveContext, EventRequest, LogRecord, Session};
use crate::store::RecordSink;

/// What a successful save wrote and left open.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    /// Persisted rows, in write order.
    pub records: Vec<LogRecord>,
    pub open_session: Option<Session>,
}

impl SaveOutcome {
    /// The row for the event the user asked for.
    pub fn primary(&self) -> Option<&LogRecord> {
        self.records.last()
    }

    pub fn auto_stopped(&self) -> bool {
        self.records.len() > 1
    }
}

/// High-level business logic for one confirmed user action.
pub struct SaveLogic;

impl SaveLogic {
    /// Resolve `request`, persist its rows in order and commit the new state.
    ///
    /// If the auto-stop row is written but the primary row fails, the
    /// tracker stays cleared and the error is returned.
    pub fn save<S: RecordSink + ?Sized>(
        tracker: &mut SessionTracker,
        sink: &S,
        request: EventRequest,
        context: &ActiveContext,
    ) -> AppResult<SaveOutcome> {
        let action = tracker.resolve(&request, context);
        let mut records = Vec::with_capacity(2);

        if let Some(aux) = action.auxiliary {
            sink.append(&aux)?;
            tracker.clear();
            records.push(aux);
        }

        sink.append(&action.primary)?;
        records.push(action.primary);

        tracker.commit(action.new_open_session);

        Ok(SaveOutcome {
            records,
            open_session: tracker.open_session().cloned(),
        })
    }
}
