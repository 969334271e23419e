pub mod dns_cache;
pub mod timer;

pub use dns_cache::DnsCachePort;
pub use timer::{TimerFacility, TimerId};
