use super::{RecordClass, RecordType};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Resource data carried by an answer record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RecordData {
    /// A, AAAA
    Address(IpAddr),
    /// CNAME, PTR, NS
    Name(String),
    /// TXT character strings
    Text(Vec<String>),
}

/// One answer section record as handed over by a resolver plugin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsAnswer {
    pub name: String,
    #[serde(rename = "dns_type", default)]
    pub record_type: RecordType,
    #[serde(rename = "dns_class", default)]
    pub class: RecordClass,
    pub ttl: u32,
    pub data: RecordData,
}

impl DnsAnswer {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        class: RecordClass,
        ttl: u32,
        data: RecordData,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
            ttl,
            data,
        }
    }

    /// Text stored in the resolution cache for this answer.
    ///
    /// Address records yield the IP, CNAME/PTR records the target name.
    /// Everything else (or a type/data mismatch) is not cache-worthy.
    pub fn cache_answer(&self) -> Option<String> {
        match (&self.data, self.record_type) {
            (RecordData::Address(ip), rt) if rt.is_address() => Some(ip.to_string()),
            (RecordData::Name(target), rt) if rt.is_name() => Some(target.clone()),
            _ => None,
        }
    }
}
