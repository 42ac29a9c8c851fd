//! Structured JSONL launch events.
//!
//! Each line is one serialized [`LogEntry`]: required `timestamp`, `level`,
//! and `event` fields, plus skip-if-none context. Purely observational;
//! nothing consumes these lines as a contract.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// One launch event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Milliseconds since the unix epoch, as a string.
    pub timestamp: String,
    pub level: LogLevel,
    pub event: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl LogEntry {
    #[must_use]
    pub fn new(level: LogLevel, event: impl Into<String>) -> Self {
        LogEntry {
            timestamp: unix_millis_now(),
            level,
            event: event.into(),
            library: None,
            symbol: None,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_library(mut self, library: &str) -> Self {
        self.library = Some(library.to_string());
        self
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

fn unix_millis_now() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    millis.to_string()
}

/// Writes JSONL entries to a sink.
pub struct LogEmitter<W: Write> {
    out: W,
}

impl LogEmitter<std::fs::File> {
    /// Append to `path`, creating it if needed.
    pub fn to_file(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(LogEmitter::new(file))
    }
}

impl<W: Write> LogEmitter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        LogEmitter { out }
    }

    /// Write one entry as a single JSONL line.
    pub fn emit(&mut self, entry: &LogEntry) -> io::Result<()> {
        let line = serde_json::to_string(entry).map_err(io::Error::other)?;
        writeln!(self.out, "{line}")
    }

    /// Recover the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
