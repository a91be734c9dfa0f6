//! Live capture and drone speaker settings.

use serde::{Deserialize, Serialize};

/// Live screen snapshot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Thumbnails kept in the live capture strip.
    pub max_thumbnails: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self { max_thumbnails: 12 }
    }
}

/// Drone loudspeaker (a separate device on the field network).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerConfig {
    pub base_url: String,
    /// Volume percentage sent with uploads (0-100).
    pub default_volume: u32,
}

impl Default for SpeakerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://10.84.160.98:5000".into(),
            default_volume: 70,
        }
    }
}
