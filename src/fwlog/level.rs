//! Facade severity levels

use crate::core::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity accepted by the [`Logger`](super::Logger) facade.
///
/// Ordered `Debug < Info < Warn < Error < Fatal`. Raw integers outside
/// `0..=4` convert to `Info` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Level {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl Level {
    /// Map to the engine's severity. Total: every facade level has a
    /// counterpart.
    pub fn to_log_level(self) -> LogLevel {
        match self {
            Level::Debug => LogLevel::Debug,
            Level::Info => LogLevel::Info,
            Level::Warn => LogLevel::Warn,
            Level::Error => LogLevel::Error,
            Level::Fatal => LogLevel::Fatal,
        }
    }

    /// Inverse of [`to_log_level`](Self::to_log_level); `Trace` has no facade
    /// counterpart and reads back as `Debug`.
    pub fn from_log_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace | LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warn,
            LogLevel::Error => Level::Error,
            LogLevel::Fatal => Level::Fatal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.to_log_level().to_lowercase_str()
    }
}

impl From<i32> for Level {
    fn from(raw: i32) -> Self {
        match raw {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warn,
            3 => Level::Error,
            4 => Level::Fatal,
            _ => Level::Info,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        level.to_log_level()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(format!("Invalid level: '{}'", s)),
        }
    }
}
