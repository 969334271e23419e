use crate::SharedSession;
use emudns_application::use_cases::ExportCacheUseCase;
use emudns_domain::CacheRecord;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Periodically pages through the cache and publishes the live records.
pub struct ExportJob {
    session: SharedSession,
    export: ExportCacheUseCase,
    interval_secs: u64,
    sink: Option<mpsc::Sender<Vec<CacheRecord>>>,
    shutdown: CancellationToken,
}

impl ExportJob {
    pub fn new(session: SharedSession, export: ExportCacheUseCase) -> Self {
        Self {
            session,
            export,
            interval_secs: 10,
            sink: None,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    /// Each export is sent here; without a sink only the count is logged.
    pub fn with_sink(mut self, sink: mpsc::Sender<Vec<CacheRecord>>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(interval_secs = self.interval_secs, "Starting cache export job");

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs.max(1));
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("ExportJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.run_once().await;
                    }
                }
            }
        })
    }

    async fn run_once(&self) {
        let result = {
            let mut session = self.session.lock().await;
            self.export.execute(&mut *session)
        };

        match result {
            Ok(records) => {
                info!(records = records.len(), "Cache export completed");
                if let Some(sink) = &self.sink {
                    if sink.send(records).await.is_err() {
                        warn!("ExportJob: export receiver dropped");
                    }
                }
            }
            Err(e) => {
                error!(error = %e, "Cache export failed");
            }
        }
    }
}
