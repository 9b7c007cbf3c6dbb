mod common;
use common::{header_count, read_records, setup_log};
use flowlogger::core::save::SaveLogic;
use flowlogger::core::session::SessionTracker;
use flowlogger::errors::{AppError, AppResult};
use flowlogger::models::{ActiveContext, EventKind, EventRequest, LogRecord, Session};
use flowlogger::store::{EventLogger, RecordSink};
use std::cell::Cell;
use std::io;

/// Writes the first `ok_rows` records to a real log, then fails like a full disk.
struct FailingAfter {
    inner: EventLogger,
    ok_rows: usize,
    written: Cell<usize>,
}

impl RecordSink for FailingAfter {
    fn append(&self, record: &LogRecord) -> AppResult<()> {
        if self.written.get() >= self.ok_rows {
            return Err(AppError::io_failure(
                self.inner.path(),
                io::Error::other("disk full"),
            ));
        }
        self.inner.append(record)?;
        self.written.set(self.written.get() + 1);
        Ok(())
    }
}

fn request(event: EventKind, stop_previous: bool, promote: bool, note: &str) -> EventRequest {
    EventRequest::new(event, stop_previous, promote, note, "")
}

#[test]
fn test_full_session_flow_is_persisted_in_order() {
    let (_dir, path) = setup_log("full_flow");
    let logger = EventLogger::new(&path);
    let mut tracker = SessionTracker::new();
    let ctx = ActiveContext::default();

    let first = SaveLogic::save(
        &mut tracker,
        &logger,
        request(EventKind::Start, true, false, "write report"),
        &ctx,
    )
    .expect("start saved");
    let a = first.open_session.clone().expect("session A open");
    assert_eq!(first.records.len(), 1);

    SaveLogic::save(
        &mut tracker,
        &logger,
        request(EventKind::Note, false, false, "outline done"),
        &ctx,
    )
    .expect("note saved");

    let third = SaveLogic::save(
        &mut tracker,
        &logger,
        request(EventKind::Start, true, false, "email"),
        &ctx,
    )
    .expect("second start saved");
    assert!(third.auto_stopped());
    let b = third.open_session.clone().expect("session B open");
    assert_ne!(a.id, b.id);

    SaveLogic::save(
        &mut tracker,
        &logger,
        request(EventKind::Stop, false, false, "done"),
        &ctx,
    )
    .expect("stop saved");
    assert!(tracker.open_session().is_none());

    let rows = read_records(&path);
    let summary: Vec<(EventKind, String, String)> = rows
        .iter()
        .map(|r| (r.event, r.session_id.clone(), r.note.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (EventKind::Start, a.id.clone(), "write report".to_string()),
            (EventKind::Note, a.id.clone(), "outline done".to_string()),
            (EventKind::Stop, a.id.clone(), "(auto-stop)".to_string()),
            (EventKind::Start, b.id.clone(), "email".to_string()),
            (EventKind::Stop, b.id.clone(), "done".to_string()),
        ]
    );
}

#[test]
fn test_promoted_note_opens_session() {
    let (_dir, path) = setup_log("promote");
    let logger = EventLogger::new(&path);
    let mut tracker = SessionTracker::new();

    let outcome = SaveLogic::save(
        &mut tracker,
        &logger,
        request(EventKind::Note, false, true, "spontaneous focus"),
        &ActiveContext::default(),
    )
    .expect("note saved");

    let open = tracker.open_session().expect("session open");
    assert_eq!(outcome.primary().map(|r| r.session_id.as_str()), Some(open.id.as_str()));
    assert_eq!(read_records(&path).len(), 1);
}

#[test]
fn test_stop_without_session_leaves_state_empty() {
    let (_dir, path) = setup_log("stop_empty");
    let logger = EventLogger::new(&path);
    let mut tracker = SessionTracker::new();

    let outcome = SaveLogic::save(
        &mut tracker,
        &logger,
        request(EventKind::Stop, true, false, ""),
        &ActiveContext::default(),
    )
    .expect("stop saved");

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].session_id, "");
    assert!(tracker.open_session().is_none());
}

#[test]
fn test_failed_start_does_not_open_session() {
    let (dir, _) = setup_log("failed_start");
    let logger = EventLogger::new(dir.path().join("missing").join("log.csv"));
    let mut tracker = SessionTracker::new();

    let err = SaveLogic::save(
        &mut tracker,
        &logger,
        request(EventKind::Start, false, false, "x"),
        &ActiveContext::default(),
    )
    .expect_err("write must fail");

    assert!(matches!(err, AppError::IoFailure { .. }));
    assert!(tracker.open_session().is_none());
}

#[test]
fn test_failed_auto_stop_keeps_session_open() {
    let (dir, _) = setup_log("failed_auto_stop");
    let logger = EventLogger::new(dir.path().join("missing").join("log.csv"));
    let mut tracker = SessionTracker::new();
    let open = Session::begin();
    tracker.commit(Some(open.clone()));

    let result = SaveLogic::save(
        &mut tracker,
        &logger,
        request(EventKind::Note, true, false, "x"),
        &ActiveContext::default(),
    );

    assert!(result.is_err());
    assert_eq!(tracker.open_session(), Some(&open));
}

#[test]
fn test_failed_primary_after_auto_stop_leaves_session_closed() {
    let (_dir, path) = setup_log("failed_primary");
    let sink = FailingAfter {
        inner: EventLogger::new(&path),
        ok_rows: 1,
        written: Cell::new(0),
    };
    let mut tracker = SessionTracker::new();
    let open = Session::begin();
    tracker.commit(Some(open.clone()));

    let result = SaveLogic::save(
        &mut tracker,
        &sink,
        request(EventKind::Start, true, false, "x"),
        &ActiveContext::default(),
    );

    assert!(matches!(result, Err(AppError::IoFailure { .. })));
    // the auto-stop row is durable, so the old session is gone
    assert!(tracker.open_session().is_none());

    assert_eq!(header_count(&path), 1);
    let rows = read_records(&path);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].event, EventKind::Stop);
    assert_eq!(rows[0].session_id, open.id);
    assert_eq!(rows[0].note, "(auto-stop)");
    assert!(rows.iter().all(|r| r.event != EventKind::Start));
}
