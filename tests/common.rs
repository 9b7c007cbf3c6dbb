#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use flowlogger::models::LogRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Binary under test, with its config dir pointed at `home`.
pub fn flog(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("flowlogger");
    cmd.env(flowlogger::config::HOME_ENV, home);
    cmd.env_remove("FLOWLOGGER_LOG");
    cmd
}

/// Fresh temp dir plus the path of a (not yet existing) log file inside it.
pub fn setup_log(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(format!("{}_flow_log.csv", name));
    (dir, path)
}

pub fn read_records(path: &Path) -> Vec<LogRecord> {
    let mut rdr = csv::Reader::from_path(path).expect("open log");
    rdr.deserialize()
        .map(|r| r.expect("valid log row"))
        .collect()
}

pub fn header_count(path: &Path) -> usize {
    fs::read_to_string(path)
        .expect("read log")
        .lines()
        .filter(|l| l.starts_with("log_id,"))
        .count()
}

pub fn line_count(path: &Path) -> usize {
    fs::read_to_string(path).expect("read log").lines().count()
}
