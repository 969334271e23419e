use crate::{ExportJob, FlushJob, TickLoopJob};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_tick_loop(TickLoopJob::new(session.clone(), tick).with_cancellation(token.clone()))
///     .with_export(ExportJob::new(session, export).with_cancellation(token))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    tick_loop: Option<TickLoopJob>,
    export: Option<ExportJob>,
    flush: Option<FlushJob>,
}

/// Handles of the spawned jobs. `tick_loop` finishes only once the cache
/// has been drained.
pub struct JobHandles {
    pub tick_loop: Option<JoinHandle<()>>,
    pub others: Vec<JoinHandle<()>>,
}

impl JobHandles {
    /// Wait for every job, the tick loop last.
    pub async fn join(self) {
        for handle in self.others {
            let _ = handle.await;
        }
        if let Some(handle) = self.tick_loop {
            let _ = handle.await;
        }
    }
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            tick_loop: None,
            export: None,
            flush: None,
        }
    }

    pub fn with_tick_loop(mut self, job: TickLoopJob) -> Self {
        self.tick_loop = Some(job);
        self
    }

    pub fn with_export(mut self, job: ExportJob) -> Self {
        self.export = Some(job);
        self
    }

    pub fn with_flush(mut self, job: FlushJob) -> Self {
        self.flush = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) -> JobHandles {
        info!("Starting background job runner");

        let mut handles = JobHandles {
            tick_loop: None,
            others: Vec::new(),
        };

        if let Some(job) = self.tick_loop {
            handles.tick_loop = Some(Arc::new(job).start().await);
        }

        if let Some(job) = self.export {
            handles.others.push(Arc::new(job).start().await);
        }

        if let Some(job) = self.flush {
            handles.others.push(Arc::new(job).start().await);
        }

        info!("All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
