#![allow(dead_code)]

use emudns_application::ports::DnsCachePort;
use emudns_domain::{CacheRecord, DomainError, RecordClass, RecordType};

// ============================================================================
// Mock DnsCachePort
// ============================================================================

/// Vec-backed cache: insertion ordered, no expiry, flush clears immediately.
#[derive(Default)]
pub struct MockDnsCache {
    records: Vec<CacheRecord>,
    cursor: usize,
    ready: bool,
    pub get_next_calls: usize,
    pub flushes: usize,
}

impl MockDnsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(count: usize) -> Self {
        let mut cache = Self::new();
        for i in 0..count {
            cache.add_entry(
                &format!("host{i}.example"),
                RecordType::A,
                RecordClass::IN,
                300,
                &format!("10.0.0.{}", i % 250),
            );
        }
        cache
    }

    pub fn records(&self) -> &[CacheRecord] {
        &self.records
    }
}

impl DnsCachePort for MockDnsCache {
    fn add_entry(
        &mut self,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
        ttl: u32,
        answer: &str,
    ) {
        self.remove_record(name, record_type, class, answer);
        self.records.push(CacheRecord {
            name: name.to_string(),
            record_type,
            class,
            ttl,
            answer: answer.to_string(),
            time_left: ttl,
        });
    }

    fn remove_record(
        &mut self,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
        answer: &str,
    ) -> bool {
        let before = self.records.len();
        self.records.retain(|r| {
            !(r.name == name && r.record_type == record_type && r.class == class && r.answer == answer)
        });
        before != self.records.len()
    }

    fn flush(&mut self) {
        self.flushes += 1;
        self.records.clear();
    }

    fn iter_reset(&mut self) -> bool {
        self.cursor = 0;
        self.ready = !self.records.is_empty();
        !self.ready
    }

    fn iter_is_stopped(&self) -> bool {
        !self.ready
    }

    fn get_next(&mut self, count: usize) -> Result<Vec<CacheRecord>, DomainError> {
        if !self.ready {
            return Err(DomainError::IteratorNotReady);
        }
        self.get_next_calls += 1;

        let mut page = Vec::new();
        for _ in 0..count {
            match self.records.get(self.cursor) {
                Some(record) => {
                    page.push(record.clone());
                    self.cursor += 1;
                }
                None => {
                    self.ready = false;
                    break;
                }
            }
        }
        Ok(page)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
