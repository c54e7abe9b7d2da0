//! Formatting macros for the logging facade.
//!
//! Each macro takes `format!`-style arguments and logs through the
//! process-wide default logger. Prefix the arguments with `logger: <expr>;`
//! to log through a specific [`Logger`](crate::fwlog::Logger) instead.
//! Start them with `values:` to log a list of operands joined by spaces,
//! see [`Values`](crate::fwlog::Values).
//!
//! # Examples
//!
//! ```
//! use fawa::fwlog::{EngineLogger, Logger};
//! use fawa::core::SharedBuffer;
//! use fawa::{fwlog_info, fwlog_warn};
//!
//! // Default logger
//! fwlog_info!("Server started");
//!
//! // Explicit logger
//! let buffer = SharedBuffer::new();
//! let logger = EngineLogger::new();
//! logger.set_output(Box::new(buffer.clone()));
//! fwlog_warn!(logger: logger; "Retry attempt {} of {}", 3, 5);
//! assert!(buffer.contents().contains("Retry attempt 3 of 5"));
//!
//! // Operands instead of a format string
//! fwlog_warn!(logger: logger; values: "giving up after", 5, "attempts");
//! assert!(buffer.contents().contains("giving up after 5 attempts"));
//! ```

/// Log a debug-level message.
///
/// ```
/// use fawa::fwlog_debug;
/// fwlog_debug!("Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! fwlog_debug {
    (logger: $logger:expr; values: $($value:expr),+ $(,)?) => {{
        use $crate::fwlog::Logger as _;
        $logger.debug(&$crate::fwlog::Values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    }};
    (values: $($value:expr),+ $(,)?) => {
        $crate::fwlog::debug($crate::fwlog::Values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    };
    (logger: $logger:expr; $($arg:tt)+) => {{
        use $crate::fwlog::Logger as _;
        $logger.debugf(format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::fwlog::debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// ```
/// use fawa::fwlog_info;
/// fwlog_info!("Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! fwlog_info {
    (logger: $logger:expr; values: $($value:expr),+ $(,)?) => {{
        use $crate::fwlog::Logger as _;
        $logger.info(&$crate::fwlog::Values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    }};
    (values: $($value:expr),+ $(,)?) => {
        $crate::fwlog::info($crate::fwlog::Values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    };
    (logger: $logger:expr; $($arg:tt)+) => {{
        use $crate::fwlog::Logger as _;
        $logger.infof(format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::fwlog::infof(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! fwlog_warn {
    (logger: $logger:expr; values: $($value:expr),+ $(,)?) => {{
        use $crate::fwlog::Logger as _;
        $logger.warn(&$crate::fwlog::Values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    }};
    (values: $($value:expr),+ $(,)?) => {
        $crate::fwlog::warn($crate::fwlog::Values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    };
    (logger: $logger:expr; $($arg:tt)+) => {{
        use $crate::fwlog::Logger as _;
        $logger.warnf(format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::fwlog::warnf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// ```
/// use fawa::fwlog_error;
/// fwlog_error!("Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! fwlog_error {
    (logger: $logger:expr; values: $($value:expr),+ $(,)?) => {{
        use $crate::fwlog::Logger as _;
        $logger.error(&$crate::fwlog::Values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    }};
    (values: $($value:expr),+ $(,)?) => {
        $crate::fwlog::error($crate::fwlog::Values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    };
    (logger: $logger:expr; $($arg:tt)+) => {{
        use $crate::fwlog::Logger as _;
        $logger.errorf(format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::fwlog::errorf(format_args!($($arg)+))
    };
}

/// Log a fatal-level message, then exit the process with status 1.
///
/// ```no_run
/// use fawa::fwlog_fatal;
/// fwlog_fatal!("Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fwlog_fatal {
    (logger: $logger:expr; values: $($value:expr),+ $(,)?) => {{
        use $crate::fwlog::Logger as _;
        $logger.fatal(&$crate::fwlog::Values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    }};
    (values: $($value:expr),+ $(,)?) => {
        $crate::fwlog::fatal($crate::fwlog::Values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    };
    (logger: $logger:expr; $($arg:tt)+) => {{
        use $crate::fwlog::Logger as _;
        $logger.fatalf(format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::fwlog::fatalf(format_args!($($arg)+))
    };
}
