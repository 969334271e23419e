pub mod cache;
pub mod session;

pub use cache::{
    BoundedLru, CacheDrainer, CacheEntry, CacheEvent, CacheMetrics, CacheMetricsSnapshot,
    DnsCache, DrainTick, Fingerprint, OrderedList,
};
pub use session::{CacheSession, SessionEvent};
