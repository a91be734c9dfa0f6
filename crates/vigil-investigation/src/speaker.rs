//! Drone loudspeaker control.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::InvestigationError;

/// Status text shown when the drone cannot be reached.
pub const SPEAKER_CONNECT_ERROR: &str = "Error: Could not connect to the drone's audio system.";

const UPLOAD_DEFAULT_MESSAGE: &str = "Success! Music is playing.";
const STOP_DEFAULT_MESSAGE: &str = "Music stopped.";

#[derive(Debug, Default, Deserialize)]
struct SpeakerReply {
    #[serde(default)]
    message: Option<String>,
}

/// Talks to the audio service running on the drone.
pub struct SpeakerClient {
    base_url: String,
    http: reqwest::Client,
}

impl SpeakerClient {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, InvestigationError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| InvestigationError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Upload an audio file and start playing it at `volume` percent.
    pub async fn upload(
        &self,
        file_name: &str,
        audio: Vec<u8>,
        volume: u8,
    ) -> Result<String, InvestigationError> {
        let url = format!("{}/upload", self.base_url);
        let volume = volume.min(100);
        debug!(%url, file_name, size = audio.len(), volume, "uploading to drone speaker");

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(audio).file_name(file_name.to_string()),
            )
            .text("volume", volume.to_string());

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| InvestigationError::Network(e.to_string()))?;
        let reply = Self::decode(response).await?;
        Ok(status_message(reply, UPLOAD_DEFAULT_MESSAGE))
    }

    /// Stop whatever the drone is playing.
    pub async fn stop(&self) -> Result<String, InvestigationError> {
        let url = format!("{}/stop", self.base_url);
        debug!(%url, "stopping drone speaker");

        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| InvestigationError::Network(e.to_string()))?;
        let reply = Self::decode(response).await?;
        Ok(status_message(reply, STOP_DEFAULT_MESSAGE))
    }

    async fn decode(response: reqwest::Response) -> Result<SpeakerReply, InvestigationError> {
        response.json::<SpeakerReply>().await.map_err(|e| {
            warn!(error = %e, "unreadable drone speaker reply");
            InvestigationError::Parse(e.to_string())
        })
    }
}

fn status_message(reply: SpeakerReply, default: &str) -> String {
    reply
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Text for the speaker panel's status line.
pub fn status_text(result: &Result<String, InvestigationError>) -> &str {
    match result {
        Ok(message) => message,
        Err(_) => SPEAKER_CONNECT_ERROR,
    }
}
