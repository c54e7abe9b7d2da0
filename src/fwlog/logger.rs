//! Logger capability trait and its engine-backed implementation

use super::level::Level;
use crate::core::{AtomicLevel, Encoder, EncoderConfig, Engine, FatalHook, Sink};
use parking_lot::RwLock;
use std::fmt;
use std::io::Write;
use std::panic::Location;

/// Capabilities every logging backend offers.
///
/// The plain methods render their argument with `Display`; the `*f` methods
/// take pre-built [`fmt::Arguments`], usually from `format_args!` or one of the
/// crate's `fwlog_*!` macros. `fatal` and `fatalf` never return: the record is
/// written first, then the process exits with status 1.
///
/// Reconfiguring a logger (`set_output`, `set_level`) while other threads are
/// logging through it is memory safe, but which records land before or after
/// the switch is unspecified. Configure first, then log.
pub trait Logger: Send + Sync {
    fn set_output(&self, output: Box<dyn Write + Send>);
    fn set_level(&self, level: Level);

    #[track_caller]
    fn fatal(&self, msg: &dyn fmt::Display) -> !;
    #[track_caller]
    fn error(&self, msg: &dyn fmt::Display);
    #[track_caller]
    fn warn(&self, msg: &dyn fmt::Display);
    #[track_caller]
    fn info(&self, msg: &dyn fmt::Display);
    #[track_caller]
    fn debug(&self, msg: &dyn fmt::Display);

    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) -> !;
    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>);
}

/// [`Logger`] backed by the crate's [`Engine`].
///
/// Starts out writing colored console lines to stdout at `Info`. After
/// [`set_output`](Logger::set_output) it writes JSON lines to the given writer.
/// The threshold is one [`AtomicLevel`] shared by every engine this logger
/// builds, so a level set before an output switch still applies after it.
///
/// # Example
///
/// ```
/// use fawa::core::SharedBuffer;
/// use fawa::fwlog::{EngineLogger, Level, Logger};
///
/// let buffer = SharedBuffer::new();
/// let logger = EngineLogger::new();
/// logger.set_output(Box::new(buffer.clone()));
/// logger.set_level(Level::Debug);
///
/// logger.debugf(format_args!("{} items", 3));
/// assert!(buffer.contents().contains("3 items"));
/// ```
pub struct EngineLogger {
    engine: RwLock<Engine>,
    level: AtomicLevel,
    config: EncoderConfig,
    fatal_hook: FatalHook,
}

impl EngineLogger {
    pub fn new() -> Self {
        Self::with_config(EncoderConfig::development(), Level::Info, Sink::stdout())
    }

    /// Console-encoded logger writing to `sink`
    pub fn with_config(config: EncoderConfig, level: Level, sink: Sink) -> Self {
        let level = AtomicLevel::new(level.to_log_level());
        let engine = Engine::builder()
            .encoder(Encoder::Console)
            .config(config.clone())
            .atomic_level(level.clone())
            .sink(sink)
            .build();

        Self {
            engine: RwLock::new(engine),
            level,
            config,
            fatal_hook: FatalHook::default(),
        }
    }

    /// Replace what happens after a fatal record. Kept across `set_output`.
    #[must_use]
    pub fn with_fatal_hook(self, hook: FatalHook) -> Self {
        let engine = self.engine.into_inner();
        let rebuilt = Engine::builder()
            .encoder(engine.core().encoder())
            .config(self.config.clone())
            .atomic_level(self.level.clone())
            .sink(engine.core().sink().clone())
            .fatal_hook(hook)
            .build();

        Self {
            engine: RwLock::new(rebuilt),
            level: self.level,
            config: self.config,
            fatal_hook: hook,
        }
    }

    pub fn level(&self) -> Level {
        Level::from_log_level(self.level.get())
    }

    pub fn encoder(&self) -> Encoder {
        self.engine.read().core().encoder()
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Records written by the current engine since the last output switch
    pub fn total_logged(&self) -> u64 {
        self.engine.read().metrics().total_logged()
    }

    /// Rendering runs before the engine lock is taken, so a `Display` impl
    /// may itself log or reconfigure this logger.
    #[track_caller]
    fn emit(&self, level: Level, msg: &dyn fmt::Display) {
        let level = level.to_log_level();
        if !self.level.enabled(level) {
            self.engine.read().metrics().record_suppressed();
            return;
        }
        let message = msg.to_string();
        self.engine.read().log_at(level, message, Location::caller());
    }

    #[track_caller]
    fn emitf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, &args);
    }

    #[track_caller]
    fn emit_fatal(&self, msg: &dyn fmt::Display) -> ! {
        let message = msg.to_string();
        self.engine.read().fatal_at(message, Location::caller())
    }
}

impl Default for EngineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for EngineLogger {
    fn set_output(&self, output: Box<dyn Write + Send>) {
        let rebuilt = Engine::builder()
            .encoder(Encoder::Json)
            .config(self.config.clone())
            .atomic_level(self.level.clone())
            .writer(output)
            .fatal_hook(self.fatal_hook)
            .build();

        let previous = std::mem::replace(&mut *self.engine.write(), rebuilt);
        drop(previous);
    }

    fn set_level(&self, level: Level) {
        self.level.set(level.to_log_level());
    }

    #[track_caller]
    fn fatal(&self, msg: &dyn fmt::Display) -> ! {
        self.emit_fatal(msg)
    }

    #[track_caller]
    fn error(&self, msg: &dyn fmt::Display) {
        self.emit(Level::Error, msg);
    }

    #[track_caller]
    fn warn(&self, msg: &dyn fmt::Display) {
        self.emit(Level::Warn, msg);
    }

    #[track_caller]
    fn info(&self, msg: &dyn fmt::Display) {
        self.emit(Level::Info, msg);
    }

    #[track_caller]
    fn debug(&self, msg: &dyn fmt::Display) {
        self.emit(Level::Debug, msg);
    }

    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit_fatal(&args)
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emitf(Level::Error, args);
    }

    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emitf(Level::Warn, args);
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.emitf(Level::Info, args);
    }

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emitf(Level::Debug, args);
    }
}
