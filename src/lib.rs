//! # fawa
//!
//! Leveled logging facade with a swappable process-wide logger, plus small
//! filesystem helpers.
//!
//! ## Layout
//!
//! - [`fwlog`]: the `Logger` trait, its engine-backed implementation, the
//!   process-wide default and package-level functions
//! - [`core`]: the synchronous engine the facade delegates to (levels,
//!   encoders, sinks)
//! - [`util`]: directory and file helpers

pub mod core;
pub mod fwlog;
pub mod macros;
pub mod util;

pub mod prelude {
    pub use crate::core::{
        AtomicLevel, Encoder, EncoderConfig, Engine, FatalHook, LogLevel, LoggerError, Result,
        SharedBuffer, Sink,
    };
    pub use crate::fwlog::{default_logger, set_logger, EngineLogger, Level, Logger};
}

pub use crate::core::{LoggerError, Result};
pub use fwlog::{EngineLogger, Level, Logger};
