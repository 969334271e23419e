pub mod export;
pub mod flush;
pub mod runner;
pub mod tick_loop;

use emudns_infrastructure::dns::CacheSession;
use std::sync::Arc;
use tokio::sync::Mutex;

pub use export::ExportJob;
pub use flush::FlushJob;
pub use runner::JobRunner;
pub use tick_loop::TickLoopJob;

/// Cache session shared by the jobs. The mutex serializes every access so
/// the session only ever sees one caller at a time.
pub type SharedSession = Arc<Mutex<CacheSession>>;

pub fn shared(session: CacheSession) -> SharedSession {
    Arc::new(Mutex::new(session))
}
