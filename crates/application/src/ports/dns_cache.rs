use emudns_domain::{CacheRecord, DomainError, RecordClass, RecordType};

/// Producer and consumer surface of the resolution cache.
///
/// Implementations are driven from a single tick thread and are not
/// expected to be internally synchronized.
pub trait DnsCachePort {
    fn add_entry(
        &mut self,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
        ttl: u32,
        answer: &str,
    );

    /// Remove the record with this identity in the current epoch.
    /// Returns `false` when there was nothing to remove.
    fn remove_record(
        &mut self,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
        answer: &str,
    ) -> bool;

    /// Logically clear the cache without touching any entry.
    fn flush(&mut self);

    /// Returns `true` when the cache is empty and the iterator stays stopped.
    fn iter_reset(&mut self) -> bool;

    fn iter_is_stopped(&self) -> bool;

    fn get_next(&mut self, count: usize) -> Result<Vec<CacheRecord>, DomainError>;

    /// Number of entries physically held, live or stale.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
