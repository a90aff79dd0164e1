use pokecache::config::{Config, ConfigError, FetcherMode};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.cache.cache_time_ms, 5000);
    assert_eq!(config.cache.cache_time(), Duration::from_secs(5));

    assert_eq!(config.suspense.timeout_ms, 4000);
    assert_eq!(config.suspense.busy_delay_ms, 300);
    assert_eq!(config.suspense.busy_min_duration_ms, 700);

    assert_eq!(config.fetcher.mode, FetcherMode::Graphql);
    assert_eq!(config.fetcher.endpoint, "https://graphql-pokemon2.vercel.app/");
    assert_eq!(config.fetcher.delay_ms, 1500);
    assert_eq!(config.fetcher.request_timeout_seconds, 30);
    assert_eq!(config.fetcher.connect_timeout_seconds, 5);

    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("pokecache/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config(
        r#"
[cache]
cache_time_ms = 250

[suspense]
busy_delay_ms = 100
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.cache.cache_time_ms, 250);
    assert_eq!(config.suspense.busy_delay_ms, 100);
    assert_eq!(config.suspense.timeout_ms, 4000);
    assert_eq!(config.fetcher.delay_ms, 1500);
}

#[test]
fn test_offline_mode_parses() {
    let file = write_config(
        r#"
[fetcher]
mode = "offline"
endpoint = ""
delay_ms = 0
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.fetcher.mode, FetcherMode::Offline);
    assert_eq!(config.fetcher.delay_ms, 0);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let file = write_config("[cache\ncache_time_ms = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().starts_with("Failed to parse config file"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let file = write_config("[cache]\ncache_time_ms = \"soon\"\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_loaded_file_is_validated() {
    let file = write_config("[suspense]\ntimeout_ms = 0\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_validation_busy_delay_exceeds_timeout() {
    let mut config = Config::default();
    config.suspense.busy_delay_ms = 5000;

    let err = config.validate().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("5000"));
    assert!(message.contains("4000"));
}

#[test]
fn test_validation_zero_fetcher_timeout() {
    let mut config = Config::default();
    config.fetcher.connect_timeout_seconds = 0;

    let err = config.validate().unwrap_err();
    assert!(err
        .to_string()
        .contains("fetcher timeouts must be greater than zero"));
}

#[test]
fn test_validation_endpoint_required_for_graphql() {
    let mut config = Config::default();
    config.fetcher.endpoint = "  ".to_string();
    assert!(config
        .validate()
        .unwrap_err()
        .to_string()
        .contains("fetcher.endpoint is required in graphql mode"));

    config.fetcher.mode = FetcherMode::Offline;
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_cache_time_is_allowed() {
    let mut config = Config::default();
    config.cache.cache_time_ms = 0;
    assert!(config.validate().is_ok());
}
