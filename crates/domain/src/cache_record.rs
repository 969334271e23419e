use crate::{RecordClass, RecordType};
use serde::{Deserialize, Serialize};

/// A live resolution cache entry as exported to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheRecord {
    pub name: String,
    #[serde(rename = "dns_type")]
    pub record_type: RecordType,
    #[serde(rename = "dns_class")]
    pub class: RecordClass,
    /// Time to live in seconds, as inserted
    pub ttl: u32,
    /// IP address or domain name
    pub answer: String,
    /// Seconds left before the entry expires
    pub time_left: u32,
}
