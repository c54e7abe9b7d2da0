//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::panic::Location;

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl LogEntry {
    /// Escape line breaks and tabs so one call always yields one line of
    /// output, and a message cannot forge additional records.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message),
            timestamp: Local::now(),
            file: None,
            line: None,
        }
    }

    pub fn with_location(mut self, file: &str, line: u32) -> Self {
        self.file = Some(file.to_string());
        self.line = Some(line);
        self
    }

    pub fn with_caller(self, caller: &Location<'_>) -> Self {
        self.with_location(caller.file(), caller.line())
    }

    /// Caller rendered as the last two path components plus line,
    /// e.g. `fwlog/logger.rs:42`.
    pub fn short_caller(&self) -> Option<String> {
        let file = self.file.as_deref()?;
        let line = self.line?;

        let normalized = file.replace('\\', "/");
        let short = match normalized.rmatch_indices('/').nth(1) {
            Some((idx, _)) => &normalized[idx + 1..],
            None => normalized.as_str(),
        };
        Some(format!("{}:{}", short, line))
    }
}
