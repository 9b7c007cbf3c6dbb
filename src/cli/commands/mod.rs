pub mod config;
pub mod init;
pub mod log;
pub mod run;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::EventLogger;
use std::fs;

/// Logger for the configured file, with its directory created.
pub(crate) fn open_logger(cfg: &Config) -> AppResult<EventLogger> {
    let path = cfg.log_path();
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|e| AppError::io_failure(dir, e))?;
    }
    Ok(EventLogger::new(path))
}
