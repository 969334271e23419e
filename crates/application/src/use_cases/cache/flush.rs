use tracing::info;

use crate::ports::DnsCachePort;

/// Administrative flush: every record currently cached becomes invisible
/// at once, physical removal happens on later ticks.
pub struct FlushCacheUseCase;

impl FlushCacheUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Returns the number of entries that were held when the flush happened.
    pub fn execute(&self, cache: &mut dyn DnsCachePort) -> usize {
        let held = cache.len();
        cache.flush();
        info!(entries = held, "Cache flush requested");
        held
    }
}

impl Default for FlushCacheUseCase {
    fn default() -> Self {
        Self::new()
    }
}
