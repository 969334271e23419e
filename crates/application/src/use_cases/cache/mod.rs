pub mod cache_answers;
pub mod export;
pub mod flush;

pub use cache_answers::CacheAnswersUseCase;
pub use export::ExportCacheUseCase;
pub use flush::FlushCacheUseCase;
