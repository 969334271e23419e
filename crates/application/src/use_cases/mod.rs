pub mod cache;

// Re-export use cases
pub use cache::{CacheAnswersUseCase, ExportCacheUseCase, FlushCacheUseCase};
