//! Shared, atomically updated severity threshold

use super::log_level::LogLevel;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// A cloneable handle to a minimum severity.
///
/// Every clone points at the same underlying value, so a core built from one
/// clone observes `set` calls made through any other. This is what lets a
/// level change survive when the facade rebuilds its engine for a new sink.
///
/// # Example
///
/// ```
/// use fawa::core::{AtomicLevel, LogLevel};
///
/// let level = AtomicLevel::new(LogLevel::Info);
/// let shared = level.clone();
/// shared.set(LogLevel::Debug);
/// assert_eq!(level.get(), LogLevel::Debug);
/// ```
#[derive(Debug, Clone)]
pub struct AtomicLevel {
    inner: Arc<AtomicU8>,
}

impl AtomicLevel {
    pub fn new(level: LogLevel) -> Self {
        Self {
            inner: Arc::new(AtomicU8::new(level as u8)),
        }
    }

    #[inline]
    pub fn get(&self) -> LogLevel {
        LogLevel::from_u8(self.inner.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set(&self, level: LogLevel) {
        self.inner.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a record at `level` passes this threshold
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.get()
    }
}

impl Default for AtomicLevel {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}
