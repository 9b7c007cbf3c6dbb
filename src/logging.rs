//! Diagnostic logging setup.

use std::env;
use tracing_subscriber::EnvFilter;

/// Filter directives for diagnostics, e.g. `FLOWLOGGER_LOG=debug`.
pub const LOG_ENV: &str = "FLOWLOGGER_LOG";

/// Install the global subscriber. Diagnostics go to stderr so stdout stays
/// free for the dialog. Calling it twice is harmless.
pub fn init_logging() {
    let filter = env::var(LOG_ENV)
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
