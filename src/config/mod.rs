use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Overrides the configuration directory (used by tests and portable setups).
pub const HOME_ENV: &str = "FLOWLOGGER_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_trigger")]
    pub trigger: String,
    #[serde(default = "default_stop_previous")]
    pub stop_previous_default: bool,
    #[serde(default = "default_toast")]
    pub toast: bool,
}

fn default_log_file() -> String {
    Config::default_log_file().to_string_lossy().to_string()
}
fn default_trigger() -> String {
    ":l".to_string()
}
fn default_stop_previous() -> bool {
    true
}
fn default_toast() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            trigger: default_trigger(),
            stop_previous_default: default_stop_previous(),
            toast: default_toast(),
        }
    }
}

impl Config {
    /// Return the configuration directory: `$FLOWLOGGER_HOME` if set,
    /// otherwise the platform default.
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV)
            && !custom.is_empty()
        {
            return PathBuf::from(custom);
        }

        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("flowlogger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".flowlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("flowlogger.conf")
    }

    /// Default location of the CSV log
    pub fn default_log_file() -> PathBuf {
        Self::config_dir().join("flow_log.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the configuration file, creating its directory if needed.
    pub fn save(&self) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }

    /// Path of the CSV log with a leading `~/` expanded.
    pub fn log_path(&self) -> PathBuf {
        expand_home(&self.log_file)
    }
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
