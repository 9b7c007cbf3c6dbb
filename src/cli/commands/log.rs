use crate::cli::commands::open_logger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::{ContextProvider, EmptyContext};
use crate::core::save::SaveLogic;
use crate::core::session::SessionTracker;
use crate::errors::AppResult;
use crate::models::EventRequest;
use crate::ui::notify::{SaveNotifier, ToastNotifier};

/// Log one event from the command line.
///
/// Each invocation is a fresh process, so no session is open beforehand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        event,
        note,
        tags,
        promote,
    } = cmd
    {
        let logger = open_logger(cfg)?;
        let mut tracker = SessionTracker::new();
        // nothing can be open yet, so there is no previous session to stop
        let request = EventRequest::from_input(event, false, *promote, note, tags);

        let context = EmptyContext.active_context();
        let outcome = SaveLogic::save(&mut tracker, &logger, request, &context)?;

        if cfg.toast {
            ToastNotifier.saved(&outcome);
        }
        if let Some(primary) = outcome.primary() {
            println!("{}", primary.log_id);
        }
    }

    Ok(())
}
