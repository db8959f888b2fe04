//! NDJSON event types and writer
//!
//! Every `--json` line is one event object with an `event` tag and the
//! command that produced it.

use std::io::{self, Write};

use serde::Serialize;

use crate::domain::entities::ProgressionEvent;

/// Write a typed event as one NDJSON line
pub fn write_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// A ledger row, either appended by the command or read back by it
#[derive(Debug, Clone, Serialize)]
pub struct RowEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub row: &'a ProgressionEvent,
}

impl<'a> RowEvent<'a> {
    pub fn new(command: &'a str, row: &'a ProgressionEvent) -> Self {
        Self {
            event: "row",
            command,
            row,
        }
    }
}

/// Wrapper for data events that includes command context.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "data",
            command,
            data,
        }
    }
}

/// Event emitted when a command completes successfully.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appended: Option<usize>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            appended: None,
        }
    }

    pub fn with_appended(mut self, appended: usize) -> Self {
        self.appended = Some(appended);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}
