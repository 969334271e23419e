use crate::SharedSession;
use emudns_application::use_cases::FlushCacheUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Flushes the cache once after a delay.
pub struct FlushJob {
    session: SharedSession,
    flush: FlushCacheUseCase,
    after: Duration,
    shutdown: CancellationToken,
}

impl FlushJob {
    pub fn new(session: SharedSession, after: Duration) -> Self {
        Self {
            session,
            flush: FlushCacheUseCase::new(),
            after,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(after_secs = self.after.as_secs(), "Scheduling cache flush");

        tokio::spawn(async move {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("FlushJob: cancelled before flushing");
                }
                _ = tokio::time::sleep(self.after) => {
                    let mut session = self.session.lock().await;
                    self.flush.execute(&mut *session);
                }
            }
        })
    }
}
