//! Configuration schema types for Vigil.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod capture;
mod server;
mod system;

pub use assistant::*;
pub use capture::*;
pub use server::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Vigil.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct VigilConfig {
    pub server: ServerConfig,
    pub assistant: AssistantConfig,
    pub capture: CaptureConfig,
    pub speaker: SpeakerConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_server_config() {
        let config = VigilConfig::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.server.connect_timeout_secs, 10);
        assert_eq!(config.server.request_timeout_secs, 120);
    }

    #[test]
    fn default_assistant_timing() {
        let config = VigilConfig::default();
        assert!(config.assistant.enabled);
        assert_eq!(config.assistant.capture_window_ms, 5000);
        assert_eq!(config.assistant.reply_delay_ms, 500);
        assert_eq!(config.assistant.retry_backoff_ms, 1000);
        assert_eq!(config.assistant.clip_filename, "recording.wav");
        assert!(config.assistant.system_prompt.contains("disaster-response"));
    }

    #[test]
    fn default_capture_and_speaker() {
        let config = VigilConfig::default();
        assert_eq!(config.capture.max_thumbnails, 12);
        assert_eq!(config.speaker.base_url, "http://10.84.160.98:5000");
        assert_eq!(config.speaker.default_volume, 70);
    }

    #[test]
    fn default_logging_level_is_info() {
        let config = VigilConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.as_directive(), "info");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[assistant]
capture_window_ms = 3000
"#;
        let config: VigilConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.assistant.capture_window_ms, 3000);
        assert_eq!(config.assistant.reply_delay_ms, 500);
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn empty_toml_gives_full_defaults() {
        let config: VigilConfig = toml::from_str("").unwrap();
        assert_eq!(config.capture.max_thumbnails, 12);
        assert!(config.assistant.enabled);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: VigilConfig = toml::from_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_directive(), "debug");
    }

    #[test]
    fn durations_are_derived_from_millis() {
        let config = AssistantConfig {
            capture_window_ms: 2500,
            ..AssistantConfig::default()
        };
        assert_eq!(config.capture_window().as_millis(), 2500);
        assert_eq!(config.reply_delay().as_millis(), 500);
        assert_eq!(config.retry_backoff().as_millis(), 1000);
    }
}
