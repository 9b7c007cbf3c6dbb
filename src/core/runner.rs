//! Single actor owning the session state, the store and the dialog.

use crate::core::context::ContextProvider;
use crate::core::save::{SaveLogic, SaveOutcome};
use crate::core::session::SessionTracker;
use crate::core::trigger::AppEvent;
use crate::errors::AppResult;
use crate::models::{ActiveContext, EventRequest};
use crate::store::EventLogger;
use crate::ui::dialog::{Dialog, DialogState};
use crate::ui::messages::{detail, error, info, prompt, warning};
use crate::ui::notify::SaveNotifier;
use std::sync::mpsc::Receiver;
use tracing::{error as log_error, info as log_info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App<C, N> {
    tracker: SessionTracker,
    logger: EventLogger,
    context: C,
    notifier: N,
    dialog: Option<Dialog>,
    stop_previous_default: bool,
}

impl<C: ContextProvider, N: SaveNotifier> App<C, N> {
    pub fn new(logger: EventLogger, context: C, notifier: N, stop_previous_default: bool) -> Self {
        Self {
            tracker: SessionTracker::new(),
            logger,
            context,
            notifier,
            dialog: None,
            stop_previous_default,
        }
    }

    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Process events until `Shutdown` or until every sender is gone.
    pub fn run(mut self, rx: Receiver<AppEvent>) {
        for event in rx.iter() {
            if self.handle(event) == Flow::Exit {
                break;
            }
        }
        log_info!("event loop stopped");
    }

    pub fn handle(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::OpenRequested => {
                self.open_dialog();
                Flow::Continue
            }
            AppEvent::Input(line) => {
                self.feed(&line);
                Flow::Continue
            }
            AppEvent::Shutdown => {
                if self.dialog.take().is_some() {
                    warning("Dialog closed without saving.");
                }
                Flow::Exit
            }
        }
    }

    fn open_dialog(&mut self) {
        if self.dialog.is_some() {
            warn!("open requested while a dialog is active, ignoring");
            warning("A dialog is already open.");
            return;
        }

        let dialog = Dialog::open(
            &self.tracker,
            self.context.active_context(),
            self.stop_previous_default,
        );
        for line in dialog.header_lines() {
            detail(line);
        }
        prompt(dialog.question());
        self.dialog = Some(dialog);
    }

    fn feed(&mut self, line: &str) {
        let Some(dialog) = self.dialog.as_mut() else {
            detail("No dialog open: type the trigger to log an event.");
            return;
        };

        match dialog.answer(line) {
            DialogState::Pending => prompt(dialog.question()),
            DialogState::Cancelled => {
                self.dialog = None;
                info("Cancelled, nothing saved.");
            }
            DialogState::Submitted(request) => {
                let context = dialog.context().clone();
                self.dialog = None;
                if let Err(e) = self.submit(request, &context) {
                    log_error!(error = %e, "save failed");
                    error(format!("Save failed: {}", e));
                }
            }
        }
    }

    /// Run the save protocol, then notify.
    pub fn submit(
        &mut self,
        request: EventRequest,
        context: &ActiveContext,
    ) -> AppResult<SaveOutcome> {
        let outcome = SaveLogic::save(&mut self.tracker, &self.logger, request, context)?;
        self.notifier.saved(&outcome);
        Ok(outcome)
    }
}
