use flowlogger::core::session::SessionTracker;
use flowlogger::models::{ActiveContext, EventKind, EventRequest, Session};
use flowlogger::ui::dialog::{CANCEL, Dialog, DialogState, Step};

fn answer_all(dialog: &mut Dialog, lines: &[&str]) -> DialogState {
    let mut state = DialogState::Pending;
    for line in lines {
        state = dialog.answer(line);
        if state != DialogState::Pending {
            break;
        }
    }
    state
}

fn open_tracker() -> SessionTracker {
    let mut t = SessionTracker::new();
    t.commit(Some(Session::begin()));
    t
}

#[test]
fn test_defaults_without_open_session() {
    let tracker = SessionTracker::new();
    let mut d = Dialog::open(&tracker, ActiveContext::default(), true);

    assert_eq!(d.step(), Step::Event);
    let state = answer_all(&mut d, &["", " deep work ", "focus"]);

    assert_eq!(
        state,
        DialogState::Submitted(EventRequest::new(
            EventKind::Start,
            false,
            false,
            "deep work",
            "focus"
        ))
    );
}

#[test]
fn test_open_session_asks_stop_previous_first() {
    let tracker = open_tracker();
    let mut d = Dialog::open(&tracker, ActiveContext::default(), true);

    assert_eq!(d.step(), Step::StopPrevious);
    assert!(d.header_lines()[0].starts_with("Previous session open"));
    assert!(d.question().contains("[Y/n]"));

    let state = answer_all(&mut d, &["", "note", "checked mail", ""]);
    match state {
        DialogState::Submitted(r) => {
            assert!(r.stop_previous);
            assert!(!r.promote_note);
            assert_eq!(r.event, EventKind::Note);
        }
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn test_declining_stop_previous() {
    let tracker = open_tracker();
    let mut d = Dialog::open(&tracker, ActiveContext::default(), true);

    let state = answer_all(&mut d, &["n", "stop", "", ""]);
    match state {
        DialogState::Submitted(r) => {
            assert!(!r.stop_previous);
            assert_eq!(r.event, EventKind::Stop);
        }
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn test_invalid_yes_no_repeats_question() {
    let tracker = open_tracker();
    let mut d = Dialog::open(&tracker, ActiveContext::default(), false);

    assert!(d.question().contains("[y/N]"));
    assert_eq!(d.answer("maybe"), DialogState::Pending);
    assert_eq!(d.step(), Step::StopPrevious);
    assert_eq!(d.answer("yes"), DialogState::Pending);
    assert_eq!(d.step(), Step::Event);
}

#[test]
fn test_promotion_offered_only_for_note_without_session() {
    let tracker = SessionTracker::new();
    let mut d = Dialog::open(&tracker, ActiveContext::default(), true);

    d.answer("note");
    assert_eq!(d.step(), Step::Promote);
    let state = answer_all(&mut d, &["y", "idea", "x"]);
    match state {
        DialogState::Submitted(r) => {
            assert!(r.promote_note);
            assert!(!r.stop_previous);
        }
        other => panic!("unexpected state {other:?}"),
    }

    let open = open_tracker();
    let mut d = Dialog::open(&open, ActiveContext::default(), true);
    d.answer("n");
    d.answer("note");
    assert_eq!(d.step(), Step::Note);
}

#[test]
fn test_unknown_event_becomes_unpromoted_note() {
    let tracker = SessionTracker::new();
    let mut d = Dialog::open(&tracker, ActiveContext::default(), true);

    d.answer("lunch");
    // no promotion question for a value that is not a real note
    assert_eq!(d.step(), Step::Note);
    let state = answer_all(&mut d, &["sandwich", ""]);
    match state {
        DialogState::Submitted(r) => {
            assert_eq!(r.event, EventKind::Note);
            assert!(!r.promote_note);
        }
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn test_event_shortcuts_and_case() {
    for (typed, expected) in [
        ("STOP", EventKind::Stop),
        ("3", EventKind::Stop),
        ("1", EventKind::Start),
        ("Note", EventKind::Note),
    ] {
        let open = open_tracker();
        let mut d = Dialog::open(&open, ActiveContext::default(), true);
        let state = answer_all(&mut d, &["n", typed, "x", ""]);
        match state {
            DialogState::Submitted(r) => assert_eq!(r.event, expected, "typed {typed}"),
            other => panic!("unexpected state {other:?}"),
        }
    }
}

#[test]
fn test_cancel_at_any_step() {
    let tracker = open_tracker();
    let mut d = Dialog::open(&tracker, ActiveContext::default(), true);
    assert_eq!(d.answer(CANCEL), DialogState::Cancelled);

    let mut d = Dialog::open(&SessionTracker::new(), ActiveContext::default(), true);
    d.answer("start");
    d.answer("some note");
    assert_eq!(d.answer(" /cancel "), DialogState::Cancelled);
}

#[test]
fn test_header_shows_context() {
    let d = Dialog::open(
        &SessionTracker::new(),
        ActiveContext::new("Firefox", "Docs"),
        true,
    );
    assert_eq!(d.header_lines(), vec!["App: Firefox", "Title: Docs"]);

    let d = Dialog::open(&SessionTracker::new(), ActiveContext::default(), true);
    assert_eq!(d.header_lines(), vec!["App: —", "Title: —"]);
}
