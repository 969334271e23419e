use super::fingerprint::Fingerprint;
use compact_str::CompactString;
use emudns_application::ports::TimerId;
use emudns_domain::{CacheRecord, RecordClass, RecordType};

/// A resolution record held by the cache.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub name: CompactString,
    pub record_type: RecordType,
    pub class: RecordClass,
    /// TTL in seconds, as inserted
    pub ttl: u32,
    pub answer: CompactString,
    /// Timer facility clock, in seconds, when the entry was added
    pub created_secs: f64,
    pub epoch: u64,
    pub timer: Option<TimerId>,
    pub fingerprint: Fingerprint,
}

impl CacheEntry {
    /// Seconds left at `now_secs`, floored at zero once the TTL has elapsed
    /// but the expiry timer has not fired yet.
    pub fn time_left(&self, now_secs: f64) -> u32 {
        let elapsed = (now_secs - self.created_secs).max(0.0) as u64;
        u64::from(self.ttl).saturating_sub(elapsed) as u32
    }

    pub fn to_record(&self, now_secs: f64) -> CacheRecord {
        CacheRecord {
            name: self.name.to_string(),
            record_type: self.record_type,
            class: self.class,
            ttl: self.ttl,
            answer: self.answer.to_string(),
            time_left: self.time_left(now_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(ttl: u32, created_secs: f64) -> CacheEntry {
        CacheEntry {
            name: "example.com".into(),
            record_type: RecordType::A,
            class: RecordClass::IN,
            ttl,
            answer: "192.0.2.1".into(),
            created_secs,
            epoch: 0,
            timer: None,
            fingerprint: Fingerprint::compute("example.com", RecordType::A, RecordClass::IN, "192.0.2.1", 0),
        }
    }

    #[test]
    fn test_time_left_counts_down() {
        let e = entry(300, 10.0);
        assert_eq!(e.time_left(10.0), 300);
        assert_eq!(e.time_left(110.0), 200);
        assert_eq!(e.time_left(110.9), 200);
    }

    #[test]
    fn test_time_left_floors_at_zero() {
        let e = entry(5, 0.0);
        assert_eq!(e.time_left(5.0), 0);
        assert_eq!(e.time_left(60.0), 0);
    }

    #[test]
    fn test_to_record_copies_identity() {
        let record = entry(60, 0.0).to_record(15.0);
        assert_eq!(record.name, "example.com");
        assert_eq!(record.answer, "192.0.2.1");
        assert_eq!(record.ttl, 60);
        assert_eq!(record.time_left, 45);
    }
}
