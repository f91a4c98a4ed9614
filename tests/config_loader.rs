use countup::config::{Config, ConfigError, LoggingConfig, UiConfig};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.ui.title, "Count Up");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.filter, "info");
    assert_eq!(config.tick_rate(), Duration::from_millis(250));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("countup/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"[ui]
title = "Clicks"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.title, "Clicks");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_full_file_round_trips_values() {
    let (_dir, path) = write_config(
        r#"[ui]
title = "Taps"
tick_rate_ms = 100

[logging]
filter = "countup=debug"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.ui,
        UiConfig {
            title: "Taps".to_string(),
            tick_rate_ms: 100,
        }
    );
    assert_eq!(config.logging.filter, "countup=debug");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[ui\ntitle = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_blank_title_fails_validation() {
    let (_dir, path) = write_config("[ui]\ntitle = \"   \"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("ui.title"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_tick_rate_out_of_range_fails_validation() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    config.ui.tick_rate_ms = 10_000;
    assert!(config.validate().is_err());

    config.ui.tick_rate_ms = 10;
    assert!(config.validate().is_ok());
}

#[test]
fn test_unreadable_path_is_read_error() {
    // A directory exists but cannot be read as a file.
    let temp_dir = TempDir::new().unwrap();
    match Config::load_from(temp_dir.path()) {
        Err(ConfigError::ReadError { .. }) => {}
        other => panic!("Expected ReadError, got {:?}", other),
    }
}
