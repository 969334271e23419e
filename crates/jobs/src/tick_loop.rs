use crate::SharedSession;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Drives the session's timer wheel at the configured tick rate.
///
/// On cancellation the cache is drained: the job keeps ticking until the
/// drainer has emptied it, then exits.
pub struct TickLoopJob {
    session: SharedSession,
    tick: Duration,
    shutdown: CancellationToken,
}

impl TickLoopJob {
    pub fn new(session: SharedSession, tick: Duration) -> Self {
        Self {
            session,
            tick,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(tick_ms = self.tick.as_millis() as u64, "Starting tick loop job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.tick);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("TickLoopJob: shutting down, draining cache");
                        break;
                    }
                    _ = interval.tick() => {
                        let fired = self.session.lock().await.tick();
                        if fired > 0 {
                            debug!(fired, "Timers dispatched");
                        }
                    }
                }
            }

            self.drain(&mut interval).await;
        })
    }

    async fn drain(&self, interval: &mut tokio::time::Interval) {
        self.session.lock().await.start_drain();

        loop {
            let session = self.session.lock().await;
            if !session.is_draining() {
                let snapshot = session.metrics().snapshot();
                info!(
                    drain_ticks = session.drain_ticks().unwrap_or_default(),
                    insertions = snapshot.insertions,
                    expirations = snapshot.expirations,
                    flushes = snapshot.flushes,
                    reclaimed = snapshot.reclaimed,
                    drained = snapshot.drained,
                    "TickLoopJob: cache drained"
                );
                return;
            }
            drop(session);

            interval.tick().await;
            self.session.lock().await.tick();
        }
    }
}
