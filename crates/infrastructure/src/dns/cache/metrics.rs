use std::sync::atomic::{AtomicU64, Ordering};

/// Cache metrics
#[derive(Default)]
pub struct CacheMetrics {
    pub insertions: AtomicU64,
    pub refreshes: AtomicU64,
    pub expirations: AtomicU64,
    pub removals: AtomicU64,
    pub flushes: AtomicU64,
    pub reclaimed: AtomicU64,
    pub drained: AtomicU64,
}

/// Point-in-time copy of [`CacheMetrics`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheMetricsSnapshot {
    pub insertions: u64,
    pub refreshes: u64,
    pub expirations: u64,
    pub removals: u64,
    pub flushes: u64,
    pub reclaimed: u64,
    pub drained: u64,
}

impl CacheMetrics {
    pub fn snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            insertions: self.insertions.load(Ordering::Relaxed),
            refreshes: self.refreshes.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
            removals: self.removals.load(Ordering::Relaxed),
            flushes: self.flushes.load(Ordering::Relaxed),
            reclaimed: self.reclaimed.load(Ordering::Relaxed),
            drained: self.drained.load(Ordering::Relaxed),
        }
    }
}
