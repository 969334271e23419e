use super::fingerprint::Fingerprint;

/// Payload of the timers scheduled by [`DnsCache`](super::DnsCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEvent {
    /// TTL of the entry with this fingerprint elapsed.
    Expire(Fingerprint),
    /// Next reclamation step after a flush.
    FlushTick,
}
