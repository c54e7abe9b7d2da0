//! Process-wide default logger and package-level convenience functions
//!
//! The slot is initialized on first use to an [`EngineLogger`] writing colored
//! console lines to stdout at `Info`. Code that can take a logger as a
//! parameter should do so; these functions exist for top-level call sites.

use super::level::Level;
use super::logger::{EngineLogger, Logger};
use parking_lot::RwLock;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, LazyLock};

static LOGGER: LazyLock<RwLock<Arc<dyn Logger>>> =
    LazyLock::new(|| RwLock::new(Arc::new(EngineLogger::new()) as Arc<dyn Logger>));

/// The current process-wide logger. Never absent.
pub fn default_logger() -> Arc<dyn Logger> {
    Arc::clone(&LOGGER.read())
}

/// Replace the process-wide logger.
///
/// Call this once during startup, before any thread logs through the
/// package-level functions. Records issued concurrently with the swap may go
/// to either logger.
pub fn set_logger(logger: Arc<dyn Logger>) {
    *LOGGER.write() = logger;
}

/// Redirect the default logger to `output`. The default [`EngineLogger`]
/// switches to JSON lines when given an explicit writer.
pub fn set_output(output: impl Write + Send + 'static) {
    default_logger().set_output(Box::new(output));
}

/// Set the level below which the default logger drops records.
pub fn set_level(level: Level) {
    default_logger().set_level(level);
}

/// Log at fatal level through the default logger, then exit with status 1.
#[track_caller]
pub fn fatal(msg: impl fmt::Display) -> ! {
    default_logger().fatal(&msg)
}

#[track_caller]
pub fn error(msg: impl fmt::Display) {
    default_logger().error(&msg);
}

#[track_caller]
pub fn warn(msg: impl fmt::Display) {
    default_logger().warn(&msg);
}

#[track_caller]
pub fn info(msg: impl fmt::Display) {
    default_logger().info(&msg);
}

#[track_caller]
pub fn debug(msg: impl fmt::Display) {
    default_logger().debug(&msg);
}

/// Formatted fatal log through the default logger, then exit with status 1.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatalf(args)
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    default_logger().warnf(args);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}
