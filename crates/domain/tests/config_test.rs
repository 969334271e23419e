use emudns_domain::{CliOverrides, Config, ConfigError};
use std::io::Write;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_defaults_match_documented_values() {
    let config = Config::default();

    assert_eq!(config.cache.flush_threshold, 100);
    assert_eq!(config.cache.drain_threshold, 1000);
    assert_eq!(config.cache.export_batch_size, 100);
    assert_eq!(config.cache.export_interval_secs, 10);
    assert_eq!(config.timer.tick_ms, 10);
    assert_eq!(config.timer.wheel_slots, 1024);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_falls_back_to_defaults() {
    let config = Config::from_toml_str(
        r#"
        [cache]
        flush_threshold = 25

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(config.cache.flush_threshold, 25);
    assert_eq!(config.cache.drain_threshold, 1000);
    assert_eq!(config.timer.tick_ms, 10);
    assert_eq!(config.logging.level, "debug");
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_from_file_applies_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[timer]\ntick_ms = 50\nwheel_slots = 64").unwrap();

    let overrides = CliOverrides {
        log_level: Some("warn".to_string()),
        drain_threshold: Some(10),
        ..Default::default()
    };
    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.timer.tick_ms, 50);
    assert_eq!(config.timer.wheel_slots, 64);
    assert_eq!(config.cache.drain_threshold, 10);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_load_without_path_uses_defaults() {
    let config = Config::load(None, CliOverrides::default()).unwrap();
    assert_eq!(config.timer.tick_ms, 10);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = Config::load(Some("/nonexistent/emudns.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let result = Config::from_toml_str("[cache\nflush_threshold = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_zero_thresholds_are_rejected() {
    let mut config = Config::default();
    config.cache.flush_threshold = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    let mut config = Config::default();
    config.cache.drain_threshold = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.cache.export_batch_size = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_zero_tick_is_rejected() {
    let mut config = Config::default();
    config.timer.tick_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.timer.wheel_slots = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let mut config = Config::default();
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());
}
