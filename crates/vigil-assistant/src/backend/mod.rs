//! The voice endpoint: request seam, response shape, and outcome mapping.

mod http;

pub use http::HttpVoiceBackend;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;

use crate::device::AudioClip;
use crate::{AssistantError, Message};

/// Turns one recorded clip plus the history so far into a reply.
#[async_trait]
pub trait VoiceBackend: Send + Sync {
    async fn submit(
        &self,
        clip: AudioClip,
        history: &[Message],
    ) -> Result<VoiceReply, AssistantError>;
}

/// JSON body returned by `POST /voice-assistant`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VoiceReply {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub user_text: Option<String>,
    #[serde(default)]
    pub ai_reply_text: Option<String>,
    /// Base64-encoded speech for `ai_reply_text`.
    #[serde(default)]
    pub ai_reply_audio: Option<String>,
}

/// What a successful round-trip means for the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The backend heard nothing; listen again without touching history.
    Silence,
    Turn {
        user_text: String,
        reply_text: String,
        /// Decoded speech, when the backend synthesized any.
        audio: Option<Vec<u8>>,
    },
}

impl VoiceReply {
    pub fn into_outcome(self) -> Result<ReplyOutcome, AssistantError> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Err(AssistantError::Backend(error));
        }

        let user_text = match self.user_text.filter(|t| !t.is_empty()) {
            Some(t) => t,
            None => return Ok(ReplyOutcome::Silence),
        };

        let audio = match self.ai_reply_audio.filter(|a| !a.is_empty()) {
            Some(encoded) => Some(
                BASE64
                    .decode(encoded.trim())
                    .map_err(|e| AssistantError::Decode(format!("reply audio: {e}")))?,
            ),
            None => None,
        };

        Ok(ReplyOutcome::Turn {
            user_text,
            reply_text: self.ai_reply_text.unwrap_or_default(),
            audio,
        })
    }
}
