//! # emudns
//!
//! Runs a DNS resolution cache on its own tick loop: answers can be seeded
//! from a file, live records are exported periodically as JSON lines on
//! stdout, and the cache is drained before the process exits.

mod bootstrap;

use bootstrap::config::log_config;
use bootstrap::{init_logging, load_answers, load_config, seed_cache};
use clap::Parser;
use emudns_application::use_cases::ExportCacheUseCase;
use emudns_domain::{CacheRecord, CliOverrides};
use emudns_infrastructure::dns::CacheSession;
use emudns_jobs::{shared, ExportJob, FlushJob, JobRunner, TickLoopJob};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "emudns")]
#[command(version)]
#[command(about = "Tick driven DNS resolution cache for network emulation")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Tick duration in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Stale entries reclaimed per tick after a flush
    #[arg(long)]
    flush_threshold: Option<usize>,

    /// Entries removed per tick while draining on shutdown
    #[arg(long)]
    drain_threshold: Option<usize>,

    /// Seconds between exports, 0 disables exporting
    #[arg(long)]
    export_interval_secs: Option<u64>,

    /// JSON file holding an array of answers to cache at startup
    #[arg(short, long)]
    seed: Option<String>,

    /// Flush the cache once, this many seconds after startup
    #[arg(long)]
    flush_after_secs: Option<u64>,

    /// Stop after this many seconds instead of waiting for Ctrl+C
    #[arg(long)]
    run_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        tick_ms: cli.tick_ms,
        flush_threshold: cli.flush_threshold,
        drain_threshold: cli.drain_threshold,
        export_interval_secs: cli.export_interval_secs,
    };
    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);
    log_config(cli.config.as_deref(), &config);

    let mut session = CacheSession::from_config(&config);
    if let Some(path) = cli.seed.as_deref() {
        let answers = load_answers(path)?;
        seed_cache(&mut session, &answers);
    }
    let session = shared(session);

    let shutdown = CancellationToken::new();
    let mut runner = JobRunner::new().with_tick_loop(
        TickLoopJob::new(session.clone(), config.timer.tick_duration())
            .with_cancellation(shutdown.clone()),
    );

    let mut printer = None;
    if config.cache.export_interval_secs > 0 {
        let (tx, rx) = mpsc::channel(8);
        printer = Some(tokio::spawn(print_exports(rx)));
        runner = runner.with_export(
            ExportJob::new(
                session.clone(),
                ExportCacheUseCase::new(config.cache.export_batch_size),
            )
            .with_interval(config.cache.export_interval_secs)
            .with_sink(tx)
            .with_cancellation(shutdown.clone()),
        );
    }

    if let Some(secs) = cli.flush_after_secs {
        runner = runner.with_flush(
            FlushJob::new(session.clone(), Duration::from_secs(secs))
                .with_cancellation(shutdown.clone()),
        );
    }

    let handles = runner.start().await;
    info!("emudns running, press Ctrl+C to stop");

    wait_for_shutdown(cli.run_secs).await;
    shutdown.cancel();
    handles.join().await;

    if let Some(printer) = printer {
        let _ = printer.await;
    }

    info!("emudns stopped");
    Ok(())
}

async fn wait_for_shutdown(run_secs: Option<u64>) {
    let deadline = async {
        match run_secs {
            Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
            None => std::future::pending().await,
        }
    };

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                error!(error = %e, "Failed to listen for Ctrl+C");
            }
            info!("Ctrl+C received, shutting down");
        }
        _ = deadline => {
            info!(run_secs = run_secs.unwrap_or_default(), "Run time elapsed, shutting down");
        }
    }
}

async fn print_exports(mut rx: mpsc::Receiver<Vec<CacheRecord>>) {
    while let Some(records) = rx.recv().await {
        match serde_json::to_string(&records) {
            Ok(line) => println!("{line}"),
            Err(e) => error!(error = %e, "Failed to encode cache export"),
        }
    }
}
