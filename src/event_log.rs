//! Append-only run log.
//!
//! Every pipeline event becomes one line `[YYYY-MM-DD HH:MM:SS] [LEVEL] message`
//! in the log file and is mirrored to `tracing`.

use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::{error, info, warn};

pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    Info,
    Success,
    Error,
    Warning,
}

impl EventLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            EventLevel::Info => "INFO",
            EventLevel::Success => "SUCCESS",
            EventLevel::Error => "ERROR",
            EventLevel::Warning => "WARNING",
        }
    }
}

pub fn format_line(timestamp: &DateTime<Local>, level: EventLevel, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        timestamp.format(LOG_TIMESTAMP_FORMAT),
        level.as_str(),
        message
    )
}

/// Serialized writer for run events.
pub struct EventLog {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl EventLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(Box::new(file)))
    }

    pub fn from_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(writer),
        }
    }

    /// Log that discards lines, only mirroring them to `tracing`.
    pub fn discard() -> Self {
        Self::from_writer(Box::new(io::sink()))
    }

    /// Record one event, returning the timestamp it was stamped with.
    ///
    /// Write failures are reported through `tracing` and otherwise ignored.
    pub fn record(&self, level: EventLevel, message: &str) -> DateTime<Local> {
        let now = Local::now();

        match level {
            EventLevel::Info | EventLevel::Success => info!(event = level.as_str(), "{}", message),
            EventLevel::Warning => warn!("{}", message),
            EventLevel::Error => error!("{}", message),
        }

        let line = format_line(&now, level, message);
        let result = match self.sink.lock() {
            Ok(mut sink) => sink.write_all(line.as_bytes()).and_then(|_| sink.flush()),
            Err(_) => Err(io::Error::new(io::ErrorKind::Other, "event log lock poisoned")),
        };
        if let Err(e) = result {
            warn!(error = %e, "Failed to write event log line");
        }

        now
    }
}
