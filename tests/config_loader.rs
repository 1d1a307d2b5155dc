use sheetstack::config::{Config, ConfigError, DispatchConfig, HostConfig, LoggingConfig};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.presenter.history_limit, 64);
    assert_eq!(config.host.max_depth, 16);
    assert_eq!(config.dispatch.buffer, 16);
    assert_eq!(config.dispatch.timeout(), Duration::from_secs(1));
    assert_eq!(config.logging.filter, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("sheetstack/config.toml"));
}

#[test]
fn test_empty_file_yields_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).expect("empty config loads");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_sections_keep_field_defaults() {
    let (_dir, path) = write_config(
        r#"
[host]
max_depth = 4

[dispatch]
timeout_ms = 250

[logging]
filter = "sheetstack=debug"
file = "/tmp/sheetstack.log"
"#,
    );

    let config = Config::load_from(&path).expect("config loads");

    assert_eq!(config.host, HostConfig { max_depth: 4 });
    assert_eq!(
        config.dispatch,
        DispatchConfig {
            buffer: 16,
            timeout_ms: 250,
        }
    );
    assert_eq!(
        config.logging,
        LoggingConfig {
            filter: "sheetstack=debug".to_string(),
            file: Some(PathBuf::from("/tmp/sheetstack.log")),
        }
    );
    assert_eq!(config.presenter.history_limit, 64);
}

#[test]
fn test_missing_file_is_read_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = Config::load_from(&temp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[host\nmax_depth = ");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_zero_buffer_fails_validation() {
    let (_dir, path) = write_config("[dispatch]\nbuffer = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("dispatch.buffer"));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let mut config = Config::default();
    config.dispatch.timeout_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_blank_log_filter_fails_validation() {
    let mut config = Config::default();
    config.logging.filter = "   ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_zero_history_limit_is_allowed() {
    let (_dir, path) = write_config("[presenter]\nhistory_limit = 0\n");
    let config = Config::load_from(&path).expect("config loads");
    assert_eq!(config.presenter.history_limit, 0);
}
