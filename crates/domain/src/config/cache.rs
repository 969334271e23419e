use serde::{Deserialize, Serialize};

/// Resolution cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Stale entries reclaimed per tick after a flush (default: 100)
    #[serde(default = "default_flush_threshold")]
    pub flush_threshold: usize,

    /// Entries removed per tick while draining the whole table (default: 1000)
    #[serde(default = "default_drain_threshold")]
    pub drain_threshold: usize,

    /// Records requested per `get_next` call when exporting (default: 100)
    #[serde(default = "default_export_batch_size")]
    pub export_batch_size: usize,

    /// Seconds between two periodic exports, 0 disables the export job (default: 10)
    #[serde(default = "default_export_interval_secs")]
    pub export_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            flush_threshold: default_flush_threshold(),
            drain_threshold: default_drain_threshold(),
            export_batch_size: default_export_batch_size(),
            export_interval_secs: default_export_interval_secs(),
        }
    }
}

fn default_flush_threshold() -> usize {
    100
}

fn default_drain_threshold() -> usize {
    1000
}

fn default_export_batch_size() -> usize {
    100
}

fn default_export_interval_secs() -> u64 {
    10
}
