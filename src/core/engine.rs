//! Synchronous logging engine
//!
//! A [`Core`] ties together one encoder, one sink and a shared threshold.
//! An [`Engine`] wraps a core, stamps each record with its caller location,
//! keeps counters and applies the fatal hook.

use super::{
    atomic_level::AtomicLevel,
    encoder::{Encoder, EncoderConfig},
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::EngineMetrics,
    sink::Sink,
};
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

/// What happens after a fatal record has been written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalHook {
    /// Terminate the process with the given exit code
    Exit(i32),
    /// Panic with the record's message instead of exiting
    Panic,
}

impl Default for FatalHook {
    fn default() -> Self {
        FatalHook::Exit(1)
    }
}

#[derive(Debug, Clone)]
pub struct Core {
    encoder: Encoder,
    config: EncoderConfig,
    sink: Sink,
    level: AtomicLevel,
}

impl Core {
    pub fn new(encoder: Encoder, config: EncoderConfig, sink: Sink, level: AtomicLevel) -> Self {
        Self {
            encoder,
            config,
            sink,
            level,
        }
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level.enabled(level)
    }

    pub fn write(&self, entry: &LogEntry) -> Result<()> {
        let line = self.encoder.encode(&self.config, entry)?;
        self.sink.write_line(&line)
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    pub fn encoder(&self) -> Encoder {
        self.encoder
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    pub fn atomic_level(&self) -> &AtomicLevel {
        &self.level
    }
}

pub struct Engine {
    core: Core,
    fatal_hook: FatalHook,
    metrics: Arc<EngineMetrics>,
}

impl Engine {
    #[must_use]
    pub fn new(core: Core) -> Self {
        Self {
            core,
            fatal_hook: FatalHook::default(),
            metrics: Arc::new(EngineMetrics::new()),
        }
    }

    /// Create a builder for Engine
    ///
    /// # Example
    /// ```
    /// use fawa::core::{Encoder, Engine, LogLevel, SharedBuffer};
    ///
    /// let buffer = SharedBuffer::new();
    /// let engine = Engine::builder()
    ///     .level(LogLevel::Debug)
    ///     .encoder(Encoder::Json)
    ///     .writer(Box::new(buffer.clone()))
    ///     .build();
    ///
    /// engine.debug("cache warmed");
    /// assert!(buffer.contents().contains("cache warmed"));
    /// ```
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn level(&self) -> LogLevel {
        self.core.level.get()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.core.level.set(level);
    }

    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    pub fn fatal_hook(&self) -> FatalHook {
        self.fatal_hook
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.core.enabled(level)
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.log_at(level, message.into(), Location::caller());
    }

    /// Log with an explicit call site, for wrappers that capture it themselves
    pub fn log_at(&self, level: LogLevel, message: String, caller: &Location<'_>) {
        if !self.enabled(level) {
            self.metrics.record_suppressed();
            return;
        }
        self.emit(LogEntry::new(level, message).with_caller(caller));
    }

    fn emit(&self, entry: LogEntry) {
        match self.core.write(&entry) {
            Ok(()) => self.metrics.record_logged(),
            Err(e) => self.report_failure(&e),
        }
    }

    fn report_failure(&self, err: &LoggerError) {
        self.metrics.record_failed_write();
        eprintln!("[LOGGER ERROR] sink write failed: {}", err);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.fatal_at(message.into(), Location::caller())
    }

    /// Write a fatal record, flush the sink, then run the fatal hook.
    ///
    /// The hook runs even if the record could not be written.
    pub fn fatal_at(&self, message: String, caller: &Location<'_>) -> ! {
        self.log_at(LogLevel::Fatal, message.clone(), caller);
        if let Err(e) = self.core.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }

        match self.fatal_hook {
            FatalHook::Exit(code) => std::process::exit(code),
            FatalHook::Panic => panic!("fatal: {}", message),
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.core.flush()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Err(e) = self.core.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush on drop: {}", e);
        }
    }
}

/// Builder for constructing an Engine with a fluent API
pub struct EngineBuilder {
    level: AtomicLevel,
    encoder: Encoder,
    config: EncoderConfig,
    sink: Option<Sink>,
    fatal_hook: FatalHook,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            level: AtomicLevel::default(),
            encoder: Encoder::Console,
            config: EncoderConfig::default(),
            sink: None,
            fatal_hook: FatalHook::default(),
        }
    }

    /// Set the threshold on the builder's own level handle
    #[must_use = "builder methods return a new value"]
    pub fn level(self, level: LogLevel) -> Self {
        self.level.set(level);
        self
    }

    /// Share an existing threshold instead of creating a new one
    #[must_use = "builder methods return a new value"]
    pub fn atomic_level(mut self, level: AtomicLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn encoder(mut self, encoder: Encoder) -> Self {
        self.encoder = encoder;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: EncoderConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn writer(self, writer: Box<dyn Write + Send>) -> Self {
        self.sink(Sink::new(writer))
    }

    #[must_use = "builder methods return a new value"]
    pub fn fatal_hook(mut self, hook: FatalHook) -> Self {
        self.fatal_hook = hook;
        self
    }

    /// Build the Engine; writes to stdout unless a sink was given
    pub fn build(self) -> Engine {
        let sink = self.sink.unwrap_or_else(Sink::stdout);
        let mut engine = Engine::new(Core::new(self.encoder, self.config, sink, self.level));
        engine.fatal_hook = self.fatal_hook;
        engine
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
