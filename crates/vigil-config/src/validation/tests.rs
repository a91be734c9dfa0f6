//! Tests for the full validation pipeline.

use super::*;
use crate::schema::VigilConfig;

#[test]
fn default_config_validates() {
    let config = VigilConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_capture_window_too_short() {
    let mut config = VigilConfig::default();
    config.assistant.capture_window_ms = 200;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.capture_window_ms"));
}

#[test]
fn catches_retry_backoff_too_long() {
    let mut config = VigilConfig::default();
    config.assistant.retry_backoff_ms = 30_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.retry_backoff_ms"));
}

#[test]
fn zero_reply_delay_is_allowed() {
    let mut config = VigilConfig::default();
    config.assistant.reply_delay_ms = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_blank_system_prompt() {
    let mut config = VigilConfig::default();
    config.assistant.system_prompt = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.system_prompt must not be empty"));
}

#[test]
fn catches_non_http_base_url() {
    let mut config = VigilConfig::default();
    config.server.base_url = "ftp://example.org".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.base_url"));
}

#[test]
fn catches_thumbnail_limit_zero() {
    let mut config = VigilConfig::default();
    config.capture.max_thumbnails = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("capture.max_thumbnails"));
}

#[test]
fn catches_speaker_volume_over_100() {
    let mut config = VigilConfig::default();
    config.speaker.default_volume = 150;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("speaker.default_volume"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = VigilConfig::default();
    config.assistant.capture_window_ms = 1;
    config.capture.max_thumbnails = 500;
    config.server.request_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.capture_window_ms"));
    assert!(err.contains("capture.max_thumbnails"));
    assert!(err.contains("server.request_timeout_secs"));
    assert_eq!(err.matches(';').count(), 2);
}
