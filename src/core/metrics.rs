//! Engine counters
//!
//! Tracks how many records were written, filtered out by the threshold, or
//! lost to sink failures. Write failures are never surfaced to the code that
//! logged, so these counters are the only place they remain visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use fawa::core::EngineMetrics;
///
/// let metrics = EngineMetrics::new();
/// metrics.record_logged();
/// metrics.record_failed_write();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.failed_writes(), 1);
/// ```
#[derive(Debug, Default)]
pub struct EngineMetrics {
    total_logged: AtomicU64,
    suppressed: AtomicU64,
    failed_writes: AtomicU64,
}

impl EngineMetrics {
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    /// Records dropped because they were below the threshold
    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) {
        self.total_logged.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_failed_write(&self) {
        self.failed_writes.fetch_add(1, Ordering::Relaxed);
    }
}
