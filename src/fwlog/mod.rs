//! Leveled logging facade
//!
//! [`Logger`] is the stable interface; [`EngineLogger`] is the implementation
//! backed by [`crate::core::Engine`]. A process-wide default logger backs the
//! free functions in this module and the `fwlog_*!` macros.
//!
//! ```
//! use fawa::core::SharedBuffer;
//! use fawa::fwlog::{self, Level};
//!
//! let buffer = SharedBuffer::new();
//! fwlog::set_output(buffer.clone());
//! fwlog::set_level(Level::Debug);
//!
//! fwlog::info("server started");
//! fawa::fwlog_debug!("listening on {}", 8080);
//!
//! let output = buffer.contents();
//! assert!(output.contains("server started"));
//! assert!(output.contains("listening on 8080"));
//! ```

mod default;
mod level;
mod logger;
mod values;

pub use default::{
    debug, debugf, default_logger, error, errorf, fatal, fatalf, info, infof, set_level,
    set_logger, set_output, warn, warnf,
};
pub use level::Level;
pub use logger::{EngineLogger, Logger};
pub use values::Values;
