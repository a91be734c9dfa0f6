//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_vigil_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, vigil_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[server]
base_url = "https://ops.example.org"

[assistant]
retry_backoff_ms = 2000
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.server.base_url, "https://ops.example.org");
    assert_eq!(config.assistant.retry_backoff_ms, 2000);
    // Defaults preserved
    assert_eq!(config.assistant.capture_window_ms, 5000);
    assert_eq!(config.capture.max_thumbnails, 12);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, vigil_common::ConfigError::ParseError(_)));
}

#[test]
fn load_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[capture]\nmax_thumbnails = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.capture.max_thumbnails, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vigil").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.assistant.reply_delay_ms, 500);
}

#[test]
fn default_template_is_valid_toml() {
    let parsed: Result<crate::schema::VigilConfig, _> =
        toml::from_str(&super::template::default_config_toml());
    assert!(parsed.is_ok());
}

#[test]
fn default_config_path_ends_with_vigil() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("vigil/config.toml"));
    }
}
