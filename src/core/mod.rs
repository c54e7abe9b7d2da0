//! Logging engine: levels, records, encoders, sinks

pub mod atomic_level;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod metrics;
pub mod sink;

pub use atomic_level::AtomicLevel;
pub use encoder::{Encoder, EncoderConfig, LevelEncoding, DEFAULT_TIME_LAYOUT};
pub use engine::{Core, Engine, EngineBuilder, FatalHook};
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use metrics::EngineMetrics;
pub use sink::{SharedBuffer, Sink};
