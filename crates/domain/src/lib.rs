//! emudns domain layer
pub mod cache_record;
pub mod config;
pub mod dns_record;
pub mod errors;

pub use cache_record::CacheRecord;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{DnsAnswer, RecordClass, RecordData, RecordType};
pub use errors::DomainError;
