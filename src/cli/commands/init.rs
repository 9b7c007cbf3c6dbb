use crate::cli::commands::open_logger;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the CSV log with its header row
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing flowlogger…");

    if !cli.test {
        let path = cfg.save()?;
        success(format!("Config file: {}", path.display()));
    }

    let logger = open_logger(cfg)?;
    logger.ensure_store_ready()?;

    success(format!("Log file:    {}", logger.path().display()));
    Ok(())
}
