use emudns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Called once logging is up, so the summary is not lost.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        tick_ms = config.timer.tick_ms,
        wheel_slots = config.timer.wheel_slots,
        flush_threshold = config.cache.flush_threshold,
        drain_threshold = config.cache.drain_threshold,
        export_interval_secs = config.cache.export_interval_secs,
        "Configuration loaded"
    );
}
