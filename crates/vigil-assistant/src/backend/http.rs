//! HTTP client for the `/voice-assistant` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{VoiceBackend, VoiceReply};
use crate::device::AudioClip;
use crate::{AssistantError, Message};

/// Posts clips as multipart forms to `{base_url}/voice-assistant`.
pub struct HttpVoiceBackend {
    endpoint: String,
    clip_filename: String,
    http: reqwest::Client,
}

impl HttpVoiceBackend {
    pub fn new(
        base_url: &str,
        clip_filename: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, AssistantError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| AssistantError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: voice_endpoint(base_url),
            clip_filename: clip_filename.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

pub(crate) fn voice_endpoint(base_url: &str) -> String {
    format!("{}/voice-assistant", base_url.trim_end_matches('/'))
}

#[async_trait]
impl VoiceBackend for HttpVoiceBackend {
    async fn submit(
        &self,
        clip: AudioClip,
        history: &[Message],
    ) -> Result<VoiceReply, AssistantError> {
        debug!(
            endpoint = %self.endpoint,
            size = clip.len(),
            turns = history.len(),
            "voice assistant request"
        );

        let history_json = serde_json::to_string(history)
            .map_err(|e| AssistantError::Decode(format!("failed to encode history: {e}")))?;

        let audio_part = reqwest::multipart::Part::bytes(clip.bytes)
            .file_name(self.clip_filename.clone())
            .mime_str(&clip.mime)
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .part("audio_data", audio_part)
            .text("history", history_json);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AssistantError::Backend(format!("HTTP {status}: {text}")));
        }

        response
            .json::<VoiceReply>()
            .await
            .map_err(|e| AssistantError::Decode(e.to_string()))
    }
}
