//! Trigger listener: the producer side of the actor channel.
//!
//! Runs on its own thread and only ever turns input lines into
//! `AppEvent`s. Session state is never touched from here.

use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Line that stops the listener and the actor.
pub const QUIT: &str = ":q";

/// Messages consumed by the actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The trigger combination fired: open the dialog.
    OpenRequested,
    /// A line typed by the user, meant for the open dialog.
    Input(String),
    Shutdown,
}

#[derive(Debug, Clone)]
pub struct TriggerListener {
    trigger: String,
}

impl TriggerListener {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
        }
    }

    pub fn classify(&self, line: &str) -> AppEvent {
        let t = line.trim();
        if t == self.trigger {
            AppEvent::OpenRequested
        } else if t == QUIT {
            AppEvent::Shutdown
        } else {
            AppEvent::Input(line.trim_end_matches(['\r', '\n']).to_string())
        }
    }

    /// Read `reader` line by line on a background thread, forwarding each
    /// line to `tx`. End of input is forwarded as `Shutdown`.
    pub fn spawn<R>(self, reader: R, tx: Sender<AppEvent>) -> JoinHandle<()>
    where
        R: BufRead + Send + 'static,
    {
        thread::spawn(move || {
            for line in reader.lines() {
                let event = match line {
                    Ok(l) => self.classify(&l),
                    Err(e) => {
                        warn!(error = %e, "trigger input failed, stopping listener");
                        AppEvent::Shutdown
                    }
                };
                let stop = event == AppEvent::Shutdown;
                if tx.send(event).is_err() || stop {
                    debug!("trigger listener finished");
                    return;
                }
            }
            let _ = tx.send(AppEvent::Shutdown);
        })
    }
}
