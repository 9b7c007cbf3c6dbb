//! Line-driven capture dialog.
//!
//! The dialog only collects answers; it never touches the tracker or the
//! store. Each `answer()` consumes one line of input and either moves to
//! the next question or finishes with an `EventRequest`.

use crate::core::session::SessionTracker;
use crate::models::{ActiveContext, EventKind, EventRequest};

/// Typing this at any question closes the dialog without saving.
pub const CANCEL: &str = "/cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    StopPrevious,
    Event,
    Promote,
    Note,
    Tags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    /// Waiting for the answer to `Dialog::question()`.
    Pending,
    Submitted(EventRequest),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Dialog {
    banner: Option<String>,
    context: ActiveContext,
    /// Whether a session was open when the dialog was opened.
    session_open: bool,
    step: Step,
    stop_previous: bool,
    /// Event answer, normalised but not yet validated.
    event: String,
    promote_note: bool,
    note: String,
}

impl Dialog {
    pub fn open(
        tracker: &SessionTracker,
        context: ActiveContext,
        stop_previous_default: bool,
    ) -> Self {
        let session_open = tracker.has_open_session();
        Self {
            banner: tracker.banner(),
            context,
            session_open,
            step: if session_open {
                Step::StopPrevious
            } else {
                Step::Event
            },
            stop_previous: stop_previous_default,
            event: EventKind::Start.as_str().to_string(),
            promote_note: false,
            note: String::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn context(&self) -> &ActiveContext {
        &self.context
    }

    /// Read-only lines shown once when the dialog opens.
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(b) = &self.banner {
            lines.push(b.clone());
        }
        lines.push(format!("App: {}", or_dash(&self.context.app_name)));
        lines.push(format!("Title: {}", or_dash(&self.context.window_title)));
        lines
    }

    pub fn question(&self) -> String {
        match self.step {
            Step::StopPrevious => format!(
                "Stop that session when I save? {}",
                yes_no_hint(self.stop_previous)
            ),
            Step::Event => format!("Event [start/note/stop] ({}):", self.event),
            Step::Promote => format!(
                "Make this note a new session start? {}",
                yes_no_hint(self.promote_note)
            ),
            Step::Note => "What are you doing?".to_string(),
            Step::Tags => "Tags (comma-separated):".to_string(),
        }
    }

    /// Feed one line of input to the current question.
    pub fn answer(&mut self, line: &str) -> DialogState {
        let input = line.trim();
        if input.eq_ignore_ascii_case(CANCEL) {
            return DialogState::Cancelled;
        }

        match self.step {
            Step::StopPrevious => {
                // unrecognised answers repeat the question
                if let Some(v) = parse_yes_no(input, self.stop_previous) {
                    self.stop_previous = v;
                    self.step = Step::Event;
                }
            }
            Step::Event => {
                if !input.is_empty() {
                    self.event = normalize_event(input);
                }
                self.step = if self.offers_promotion() {
                    Step::Promote
                } else {
                    Step::Note
                };
            }
            Step::Promote => {
                if let Some(v) = parse_yes_no(input, self.promote_note) {
                    self.promote_note = v;
                    self.step = Step::Note;
                }
            }
            Step::Note => {
                self.note = input.to_string();
                self.step = Step::Tags;
            }
            Step::Tags => {
                return DialogState::Submitted(EventRequest::from_input(
                    &self.event,
                    self.session_open && self.stop_previous,
                    self.offers_promotion() && self.promote_note,
                    &self.note,
                    input,
                ));
            }
        }

        DialogState::Pending
    }

    /// Promotion is only offered for a real note when no session was open.
    fn offers_promotion(&self) -> bool {
        !self.session_open && EventKind::parse(&self.event) == Some(EventKind::Note)
    }
}

/// Dialog shortcuts: case-insensitive names and `1|2|3`.
fn normalize_event(input: &str) -> String {
    match input.to_lowercase().as_str() {
        "1" => EventKind::Start.as_str().to_string(),
        "2" => EventKind::Note.as_str().to_string(),
        "3" => EventKind::Stop.as_str().to_string(),
        other => other.to_string(),
    }
}

fn parse_yes_no(input: &str, default: bool) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn yes_no_hint(default: bool) -> &'static str {
    if default { "[Y/n]" } else { "[y/N]" }
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "—" } else { s }
}
