use emudns_domain::DnsAnswer;
use tracing::debug;

use crate::ports::DnsCachePort;

/// Stores the cache-worthy records of a resolver response.
///
/// Address records are kept with their IP as answer, CNAME/PTR records with
/// the target name. Any other record kind is skipped.
pub struct CacheAnswersUseCase;

impl CacheAnswersUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Returns the number of answers added to the cache.
    pub fn execute(&self, cache: &mut dyn DnsCachePort, answers: &[DnsAnswer]) -> usize {
        let mut cached = 0;

        for answer in answers {
            match answer.cache_answer() {
                Some(value) => {
                    cache.add_entry(
                        &answer.name,
                        answer.record_type,
                        answer.class,
                        answer.ttl,
                        &value,
                    );
                    cached += 1;
                }
                None => {
                    debug!(
                        name = %answer.name,
                        record_type = %answer.record_type,
                        "Skipping answer that cannot be cached"
                    );
                }
            }
        }

        cached
    }
}

impl Default for CacheAnswersUseCase {
    fn default() -> Self {
        Self::new()
    }
}
