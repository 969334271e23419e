use emudns_domain::{CacheRecord, DomainError};
use tracing::debug;

use crate::ports::DnsCachePort;

/// Exports every live record by paging through the cache iterator.
pub struct ExportCacheUseCase {
    batch_size: usize,
}

impl ExportCacheUseCase {
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn execute(&self, cache: &mut dyn DnsCachePort) -> Result<Vec<CacheRecord>, DomainError> {
        let mut records = Vec::new();

        if cache.iter_reset() {
            return Ok(records);
        }

        let mut pages = 0usize;
        while !cache.iter_is_stopped() {
            let page = cache.get_next(self.batch_size)?;
            records.extend(page);
            pages += 1;
        }

        debug!(
            records = records.len(),
            pages,
            batch_size = self.batch_size,
            "Cache export completed"
        );

        Ok(records)
    }
}
