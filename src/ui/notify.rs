use crate::core::save::SaveOutcome;
use crate::ui::messages::{color_for_event, success};

/// Hook invoked once per successful save, after every row is on disk.
pub trait SaveNotifier {
    fn saved(&self, outcome: &SaveOutcome);
}

/// Prints a short confirmation, the terminal version of a toast.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToastNotifier;

impl SaveNotifier for ToastNotifier {
    fn saved(&self, outcome: &SaveOutcome) {
        let Some(primary) = outcome.primary() else {
            return;
        };

        let event = primary.event.as_str();
        let painted = color_for_event(event).bold().paint(event);

        let mut msg = if primary.is_attached() {
            format!("Saved {} (session {})", painted, short_id(&primary.session_id))
        } else {
            format!("Saved {}", painted)
        };
        if outcome.auto_stopped() {
            msg.push_str(", previous session stopped");
        }

        success(msg);
    }
}

/// Notifier for `toast: false`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl SaveNotifier for SilentNotifier {
    fn saved(&self, _outcome: &SaveOutcome) {}
}

impl<N: SaveNotifier + ?Sized> SaveNotifier for Box<N> {
    fn saved(&self, outcome: &SaveOutcome) {
        (**self).saved(outcome)
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
