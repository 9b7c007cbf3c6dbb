//! Append-only CSV log store.

use crate::errors::{AppError, AppResult};
use crate::models::record::LogRecord;
use crate::store::schema::HEADERS;
use csv::WriterBuilder;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Destination of persisted log rows.
///
/// Each call is a complete unit: once it returns `Ok` the row is durable.
pub trait RecordSink {
    fn append(&self, record: &LogRecord) -> AppResult<()>;
}

/// Writes log records to a CSV file, one durable row per call.
///
/// The logger never creates parent directories: a missing directory is
/// reported as an `IoFailure` like any other storage problem.
#[derive(Debug, Clone)]
pub struct EventLogger {
    path: PathBuf,
}

impl EventLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the store exists and starts with the header row.
    ///
    /// Safe to call before every append: once the file has content this is
    /// a single metadata lookup.
    pub fn ensure_store_ready(&self) -> AppResult<()> {
        if let Ok(meta) = self.path.metadata()
            && meta.len() > 0
        {
            return Ok(());
        }

        let file = self.open_append()?;
        // Re-check on the opened handle: the file may have been created
        // between the lookup and the open.
        let len = file
            .metadata()
            .map_err(|e| AppError::io_failure(&self.path, e))?
            .len();
        if len > 0 {
            return Ok(());
        }

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record(HEADERS)
            .map_err(|e| AppError::io_failure(&self.path, io::Error::from(e)))?;
        self.finish(wtr)?;

        debug!(path = %self.path.display(), "log store header written");
        Ok(())
    }

    /// Append one record and sync it to disk.
    pub fn append(&self, record: &LogRecord) -> AppResult<()> {
        self.ensure_store_ready()?;

        let file = self.open_append()?;
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.serialize(record)
            .map_err(|e| AppError::io_failure(&self.path, io::Error::from(e)))?;
        self.finish(wtr)?;

        debug!(
            path = %self.path.display(),
            log_id = %record.log_id,
            event = %record.event,
            session_id = %record.session_id,
            "record appended"
        );
        Ok(())
    }

    fn open_append(&self) -> AppResult<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AppError::io_failure(&self.path, e))
    }

    /// Flush the writer and push the bytes to stable storage.
    fn finish(&self, mut wtr: csv::Writer<File>) -> AppResult<()> {
        wtr.flush()
            .map_err(|e| AppError::io_failure(&self.path, e))?;
        let file = wtr
            .into_inner()
            .map_err(|e| AppError::io_failure(&self.path, io::Error::other(e.to_string())))?;
        file.sync_data()
            .map_err(|e| AppError::io_failure(&self.path, e))
    }
}

impl RecordSink for EventLogger {
    fn append(&self, record: &LogRecord) -> AppResult<()> {
        EventLogger::append(self, record)
    }
}
