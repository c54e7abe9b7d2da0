//! Integration tests for the process-wide default logger
//!
//! These tests verify:
//! - Level filtering through the package-level functions
//! - Formatted variants and macros
//! - Output redirection to files
//! - Level and output idempotence
//! - Logger replacement
//! - Caller attribution and the fatal exit status
//!
//! All tests here share one global logger, so each takes `GLOBAL` first.

use fawa::core::SharedBuffer;
use fawa::fwlog::{self, EngineLogger, Level, Logger};
use fawa::{fwlog_debug, fwlog_error, fwlog_info, fwlog_warn};
use parking_lot::{const_mutex, Mutex};
use std::fmt;
use std::fs;
use std::io::Write;
use std::process::Command;
use std::sync::Arc;
use tempfile::TempDir;

static GLOBAL: Mutex<()> = const_mutex(());

fn redirect() -> SharedBuffer {
    let buffer = SharedBuffer::new();
    fwlog::set_output(buffer.clone());
    buffer
}

#[test]
fn test_logger() {
    let _guard = GLOBAL.lock();
    let buffer = redirect();
    fwlog::set_level(Level::Debug);

    fwlog::debug("debug");
    assert!(buffer.contents().contains("debug"));
    buffer.clear();

    fwlog::info("info");
    assert!(buffer.contents().contains("info"));
    buffer.clear();

    fwlog::warn("warn");
    assert!(buffer.contents().contains("warn"));
    buffer.clear();

    fwlog::error("error");
    assert!(buffer.contents().contains("error"));
    buffer.clear();

    fwlog::set_level(Level::Info);
    fwlog::debug("debug");
    assert!(!buffer.contents().contains("debug"));
    assert!(buffer.is_empty());
}

#[test]
fn test_format_logger() {
    let _guard = GLOBAL.lock();
    let buffer = redirect();
    fwlog::set_level(Level::Debug);

    fwlog::debugf(format_args!("debug {}", "message"));
    assert!(buffer.contents().contains("debug message"));
    buffer.clear();

    fwlog::infof(format_args!("info {}", "message"));
    assert!(buffer.contents().contains("info message"));
    buffer.clear();

    fwlog::warnf(format_args!("warn {}", "message"));
    assert!(buffer.contents().contains("warn message"));
    buffer.clear();

    fwlog::errorf(format_args!("error {}", "message"));
    assert!(buffer.contents().contains("error message"));
    buffer.clear();
}

#[test]
fn test_format_macros() {
    let _guard = GLOBAL.lock();
    let buffer = redirect();
    fwlog::set_level(Level::Debug);

    fwlog_debug!("debug {}", "message");
    fwlog_info!("info {}", "message");
    fwlog_warn!("warn {}", "message");
    fwlog_error!("error {}", "message");

    let lines: Vec<String> = buffer.contents().lines().map(String::from).collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("debug message"));
    assert!(lines[3].contains("error message"));
}

#[test]
fn test_file_logger() {
    let _guard = GLOBAL.lock();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("test.log");
    let file = fs::File::create(&log_path).expect("Failed to create log file");

    fwlog::set_output(file);
    fwlog::set_level(Level::Info);

    fwlog::info("this is a test log");

    // Detach the file before reading it back
    let _buffer = redirect();

    let content = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(content.contains("this is a test log"));

    let record: serde_json::Value =
        serde_json::from_str(content.lines().next().expect("one record")).expect("valid JSON");
    assert_eq!(record["level"], "INFO");
    assert_eq!(record["msg"], "this is a test log");
    assert!(record["time"].is_string());
    assert!(record["caller"].is_string());
}

#[test]
fn test_default_logger() {
    let _guard = GLOBAL.lock();
    let logger = fwlog::default_logger();
    let buffer = SharedBuffer::new();
    logger.set_output(Box::new(buffer.clone()));
    logger.set_level(Level::Info);

    logger.info(&"still here");
    assert!(buffer.contents().contains("still here"));
}

#[test]
fn test_set_level_idempotent() {
    let _guard = GLOBAL.lock();
    let buffer = redirect();

    fwlog::set_level(Level::Warn);
    fwlog::set_level(Level::Warn);

    fwlog::info("dropped");
    fwlog::warn("kept");

    let contents = buffer.contents();
    assert!(!contents.contains("dropped"));
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn test_set_output_twice_does_not_duplicate() {
    let _guard = GLOBAL.lock();
    let buffer = SharedBuffer::new();
    fwlog::set_output(buffer.clone());
    fwlog::set_output(buffer.clone());
    fwlog::set_level(Level::Info);

    fwlog::info("once");
    assert_eq!(buffer.contents().matches("once").count(), 1);
}

#[test]
fn test_level_survives_output_switch() {
    let _guard = GLOBAL.lock();
    fwlog::set_level(Level::Error);
    let buffer = redirect();

    fwlog::warn("filtered");
    assert!(buffer.is_empty());
    fwlog::set_level(Level::Info);
}

#[derive(Default)]
struct CountingLogger {
    calls: Mutex<Vec<String>>,
}

impl Logger for CountingLogger {
    fn set_output(&self, _output: Box<dyn Write + Send>) {}
    fn set_level(&self, _level: Level) {}

    fn fatal(&self, msg: &dyn fmt::Display) -> ! {
        panic!("fatal: {}", msg)
    }
    fn error(&self, msg: &dyn fmt::Display) {
        self.calls.lock().push(format!("error {}", msg));
    }
    fn warn(&self, msg: &dyn fmt::Display) {
        self.calls.lock().push(format!("warn {}", msg));
    }
    fn info(&self, msg: &dyn fmt::Display) {
        self.calls.lock().push(format!("info {}", msg));
    }
    fn debug(&self, msg: &dyn fmt::Display) {
        self.calls.lock().push(format!("debug {}", msg));
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        panic!("fatal: {}", args)
    }
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.error(&args);
    }
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.warn(&args);
    }
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.info(&args);
    }
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.debug(&args);
    }
}

#[test]
fn test_set_logger_replaces_default() {
    let _guard = GLOBAL.lock();
    let previous = fwlog::default_logger();

    let counting = Arc::new(CountingLogger::default());
    fwlog::set_logger(counting.clone());

    fwlog::info("hello");
    fwlog_warn!("{} left", 3);
    assert_eq!(*counting.calls.lock(), vec!["info hello", "warn 3 left"]);

    fwlog::set_logger(previous);
}

#[test]
fn test_set_logger_with_engine_logger() {
    let _guard = GLOBAL.lock();
    let previous = fwlog::default_logger();

    let buffer = SharedBuffer::new();
    let logger = EngineLogger::new();
    logger.set_output(Box::new(buffer.clone()));
    fwlog::set_logger(Arc::new(logger));

    fwlog::error("routed");
    assert!(buffer.contents().contains("routed"));

    fwlog::set_logger(previous);
}

fn callers(buffer: &SharedBuffer) -> Vec<String> {
    buffer
        .contents()
        .lines()
        .map(|line| {
            let record: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
            record["caller"].as_str().expect("caller").to_string()
        })
        .collect()
}

#[test]
fn test_caller_is_user_call_site() {
    let _guard = GLOBAL.lock();
    let buffer = redirect();
    fwlog::set_level(Level::Debug);

    let info_line = line!() + 1;
    fwlog::info("from function");
    let infof_line = line!() + 1;
    fwlog::infof(format_args!("from {}", "infof"));
    let macro_line = line!() + 1;
    fwlog_info!("from {}", "macro");
    let values_line = line!() + 1;
    fwlog_info!(values: "from", "values");

    let expected: Vec<String> = [info_line, infof_line, macro_line, values_line]
        .iter()
        .map(|line| format!("tests/integration_tests.rs:{}", line))
        .collect();
    assert_eq!(callers(&buffer), expected);
    assert!(buffer.contents().contains("from values"));
}

#[test]
fn test_caller_through_replaced_logger() {
    let _guard = GLOBAL.lock();
    let previous = fwlog::default_logger();

    let buffer = SharedBuffer::new();
    let logger = EngineLogger::new();
    logger.set_output(Box::new(buffer.clone()));
    fwlog::set_logger(Arc::new(logger));

    let error_line = line!() + 1;
    fwlog_error!("replaced {}", 1);

    fwlog::set_logger(previous);
    assert_eq!(
        callers(&buffer),
        vec![format!("tests/integration_tests.rs:{}", error_line)]
    );
}

const FATAL_CHILD_ENV: &str = "FAWA_FATAL_CHILD";

/// Runs inside a child process started by `test_fatal_exits_with_status_one`.
#[test]
fn fatal_child() {
    match std::env::var(FATAL_CHILD_ENV).as_deref() {
        Ok("fatal") => fwlog::fatal("goodbye"),
        Ok("fatalf") => fwlog::fatalf(format_args!("goodbye after {} retries", 3)),
        Ok("macro") => fawa::fwlog_fatal!("goodbye from {}", "macro"),
        _ => {}
    }
}

#[test]
fn test_fatal_exits_with_status_one() {
    let exe = std::env::current_exe().expect("test binary path");

    for (mode, message) in [
        ("fatal", "goodbye"),
        ("fatalf", "goodbye after 3 retries"),
        ("macro", "goodbye from macro"),
    ] {
        let output = Command::new(&exe)
            .args(["--exact", "fatal_child", "--nocapture", "--test-threads=1"])
            .env(FATAL_CHILD_ENV, mode)
            .output()
            .expect("failed to run child");

        assert_eq!(output.status.code(), Some(1), "mode {}", mode);

        let stdout = String::from_utf8_lossy(&output.stdout);
        let record = stdout
            .lines()
            .find(|line| line.contains(message))
            .unwrap_or_else(|| panic!("no record for {} in {:?}", mode, stdout));
        assert!(record.contains("FATAL"), "record was {:?}", record);
        assert!(
            record.contains("tests/integration_tests.rs:"),
            "record was {:?}",
            record
        );
    }
}
