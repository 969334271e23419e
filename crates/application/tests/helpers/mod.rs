pub mod mock_cache;

pub use mock_cache::MockDnsCache;
