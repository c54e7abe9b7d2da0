//! Record encoders
//!
//! Two encodings are provided:
//! - Console: tab-separated, human-readable line (default for terminals)
//! - Json: one JSON object per line, for files and log shippers
//!
//! Both read their field names, time layout and level rendering from a shared
//! [`EncoderConfig`], so switching encoders keeps the same field layout.

use super::error::{LoggerError, Result};
use super::log_entry::LogEntry;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp layout used by default: `2025-01-08 10:30:45.123`
pub const DEFAULT_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// How the severity label is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelEncoding {
    /// `INFO`
    #[default]
    Capital,
    /// `INFO` wrapped in an ANSI color for its severity (console only)
    CapitalColor,
    /// `info`
    Lowercase,
}

/// Field configuration shared by all encoders
///
/// # Examples
///
/// ```
/// use fawa::core::{EncoderConfig, LevelEncoding};
///
/// let config = EncoderConfig::from_json(r#"{"message_key": "message"}"#).unwrap();
/// assert_eq!(config.message_key, "message");
/// assert_eq!(config.level_encoding, LevelEncoding::Capital);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub time_key: String,
    pub level_key: String,
    pub caller_key: String,
    pub message_key: String,
    /// strftime-compatible layout, rendered in local time
    pub time_layout: String,
    pub level_encoding: LevelEncoding,
    pub include_caller: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            time_key: "time".to_string(),
            level_key: "level".to_string(),
            caller_key: "caller".to_string(),
            message_key: "msg".to_string(),
            time_layout: DEFAULT_TIME_LAYOUT.to_string(),
            level_encoding: LevelEncoding::Capital,
            include_caller: true,
        }
    }
}

impl EncoderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for interactive terminals: colored capital levels
    #[must_use]
    pub fn development() -> Self {
        Self::default().with_level_encoding(LevelEncoding::CapitalColor)
    }

    #[must_use]
    pub fn with_level_encoding(mut self, encoding: LevelEncoding) -> Self {
        self.level_encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_time_layout(mut self, layout: &str) -> Self {
        self.time_layout = layout.to_string();
        self
    }

    #[must_use]
    pub fn with_include_caller(mut self, include: bool) -> Self {
        self.include_caller = include;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let keys = [
            ("time_key", &self.time_key),
            ("level_key", &self.level_key),
            ("caller_key", &self.caller_key),
            ("message_key", &self.message_key),
        ];
        for (name, value) in keys {
            if value.is_empty() {
                return Err(LoggerError::config(
                    "EncoderConfig",
                    format!("{} must not be empty", name),
                ));
            }
        }
        if self.time_layout.is_empty()
            || StrftimeItems::new(&self.time_layout).any(|item| matches!(item, Item::Error))
        {
            return Err(LoggerError::config(
                "EncoderConfig",
                format!("invalid time_layout '{}'", self.time_layout),
            ));
        }
        Ok(())
    }

    fn encode_level(&self, entry: &LogEntry, allow_color: bool) -> String {
        match self.level_encoding {
            LevelEncoding::Lowercase => entry.level.to_lowercase_str().to_string(),
            LevelEncoding::Capital => entry.level.to_str().to_string(),
            LevelEncoding::CapitalColor if allow_color => colorize(entry),
            LevelEncoding::CapitalColor => entry.level.to_str().to_string(),
        }
    }

    /// Falls back to [`DEFAULT_TIME_LAYOUT`] if the configured layout cannot
    /// be rendered.
    fn encode_time(&self, entry: &LogEntry) -> String {
        let mut out = String::new();
        if write!(out, "{}", entry.timestamp.format(&self.time_layout)).is_err() {
            out.clear();
            let _ = write!(out, "{}", entry.timestamp.format(DEFAULT_TIME_LAYOUT));
        }
        out
    }
}

#[cfg(feature = "console")]
fn colorize(entry: &LogEntry) -> String {
    use colored::Colorize;
    entry
        .level
        .to_str()
        .color(entry.level.color_code())
        .to_string()
}

#[cfg(not(feature = "console"))]
fn colorize(entry: &LogEntry) -> String {
    entry.level.to_str().to_string()
}

/// Output encoding for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoder {
    /// `2025-01-08 10:30:45.123\tINFO\tsrc/main.rs:10\tServer started`
    #[default]
    Console,

    /// `{"caller":"src/main.rs:10","level":"INFO","msg":"Server started","time":"..."}`
    Json,
}

impl Encoder {
    /// Encode one record, without the trailing newline
    pub fn encode(&self, config: &EncoderConfig, entry: &LogEntry) -> Result<String> {
        match self {
            Encoder::Console => Ok(self.encode_console(config, entry)),
            Encoder::Json => self.encode_json(config, entry),
        }
    }

    fn encode_console(&self, config: &EncoderConfig, entry: &LogEntry) -> String {
        let mut fields = vec![config.encode_time(entry), config.encode_level(entry, true)];

        if config.include_caller {
            if let Some(caller) = entry.short_caller() {
                fields.push(caller);
            }
        }

        fields.push(entry.message.clone());
        fields.join("\t")
    }

    fn encode_json(&self, config: &EncoderConfig, entry: &LogEntry) -> Result<String> {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            config.time_key.clone(),
            serde_json::Value::String(config.encode_time(entry)),
        );
        // ANSI escapes have no place inside a JSON string
        json_obj.insert(
            config.level_key.clone(),
            serde_json::Value::String(config.encode_level(entry, false)),
        );
        if config.include_caller {
            if let Some(caller) = entry.short_caller() {
                json_obj.insert(config.caller_key.clone(), serde_json::Value::String(caller));
            }
        }
        json_obj.insert(
            config.message_key.clone(),
            serde_json::Value::String(entry.message.clone()),
        );

        Ok(serde_json::to_string(&serde_json::Value::Object(json_obj))?)
    }
}
