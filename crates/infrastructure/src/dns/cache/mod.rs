pub mod drainer;
pub mod entry;
pub mod event;
pub mod fingerprint;
pub mod lru;
pub mod metrics;
pub mod ordered_list;
pub mod storage;

pub use drainer::{CacheDrainer, DrainTick, DEFAULT_DRAIN_THRESHOLD};
pub use entry::CacheEntry;
pub use event::CacheEvent;
pub use fingerprint::Fingerprint;
pub use lru::BoundedLru;
pub use metrics::{CacheMetrics, CacheMetricsSnapshot};
pub use ordered_list::{NodeId, OrderedList};
pub use storage::{DnsCache, DEFAULT_FLUSH_THRESHOLD};
