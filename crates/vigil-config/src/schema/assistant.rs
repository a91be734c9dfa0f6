//! Voice assistant configuration types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a disaster-response assistant. Be extremely concise. \
Respond in the same language the user speaks and be very concise and to the point and clear.";

/// Voice assistant loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub enabled: bool,
    /// How long each listening window records (valid range: 1000-60000).
    pub capture_window_ms: u32,
    /// Pause between the end of a reply and the next listening window.
    pub reply_delay_ms: u32,
    /// Pause before listening again after a failed round-trip.
    pub retry_backoff_ms: u32,
    /// Seed turn of every conversation.
    pub system_prompt: String,
    /// File name attached to the uploaded audio clip.
    pub clip_filename: String,
}

impl AssistantConfig {
    pub fn capture_window(&self) -> Duration {
        Duration::from_millis(u64::from(self.capture_window_ms))
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.reply_delay_ms))
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(u64::from(self.retry_backoff_ms))
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capture_window_ms: 5000,
            reply_delay_ms: 500,
            retry_backoff_ms: 1000,
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            clip_filename: "recording.wav".into(),
        }
    }
}
