use emudns_domain::{RecordClass, RecordType};
use sha2::{Digest, Sha256};
use std::fmt;

/// Content digest identifying a cache entry within one epoch.
///
/// Computed over name, type, class, answer and epoch. The TTL is left out so
/// adding the same record again refreshes it instead of duplicating it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn compute(
        name: &str,
        record_type: RecordType,
        class: RecordClass,
        answer: &str,
        epoch: u64,
    ) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(format!("{name}-{record_type}-{class}-{answer}-{epoch}").as_bytes());
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}
