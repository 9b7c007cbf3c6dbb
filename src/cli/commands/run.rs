use crate::cli::commands::open_logger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::EmptyContext;
use crate::core::runner::App;
use crate::core::trigger::{AppEvent, QUIT, TriggerListener};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::notify::{SaveNotifier, SilentNotifier, ToastNotifier};
use std::io;
use std::sync::mpsc;

/// Start the trigger listener and hand every event to the actor.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { open } = cmd {
        let logger = open_logger(cfg)?;
        let notifier: Box<dyn SaveNotifier> = if cfg.toast {
            Box::new(ToastNotifier)
        } else {
            Box::new(SilentNotifier)
        };

        info(format!(
            "Logging to {}. Type '{}' to log an event, '{}' to quit.",
            logger.path().display(),
            cfg.trigger,
            QUIT
        ));

        let (tx, rx) = mpsc::channel();
        if *open {
            tx.send(AppEvent::OpenRequested)
                .map_err(|e| AppError::Channel(e.to_string()))?;
        }

        let listener = TriggerListener::new(cfg.trigger.clone());
        // Not joined: the listener may be blocked on stdin after `:q`.
        let _handle = listener.spawn(io::BufReader::new(io::stdin()), tx);

        App::new(logger, EmptyContext, notifier, cfg.stop_previous_default).run(rx);
    }

    Ok(())
}
