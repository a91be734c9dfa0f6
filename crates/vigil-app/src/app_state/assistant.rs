//! Voice assistant wiring: loop construction and the app-side controls.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};
use vigil_assistant::{
    AssistantEvent, AssistantSession, AudioPlayer, CaptureDevice, HttpVoiceBackend, LoopTiming,
    VoiceLoop,
};
use vigil_common::VigilError;
use vigil_config::VigilConfig;

use super::core::VigilApp;

/// Build a voice loop talking to the configured server through `device`
/// and `player`.
pub fn build_voice_loop(
    config: &VigilConfig,
    device: Arc<dyn CaptureDevice>,
    player: Arc<dyn AudioPlayer>,
) -> Result<(VoiceLoop, UnboundedReceiver<AssistantEvent>), VigilError> {
    let backend = HttpVoiceBackend::new(
        &config.server.base_url,
        config.assistant.clip_filename.clone(),
        config.server.connect_timeout(),
        config.server.request_timeout(),
    )
    .map_err(|e| VigilError::Assistant(e.to_string()))?;
    info!(endpoint = backend.endpoint(), "voice backend ready");

    let session = Arc::new(AssistantSession::new(
        config.assistant.system_prompt.clone(),
    ));
    let timing = LoopTiming {
        capture_window: config.assistant.capture_window(),
        reply_delay: config.assistant.reply_delay(),
        retry_backoff: config.assistant.retry_backoff(),
    };
    Ok(VoiceLoop::new(
        session,
        device,
        Arc::new(backend),
        player,
        timing,
    ))
}

impl VigilApp {
    pub fn attach_assistant(&mut self, voice: VoiceLoop) {
        self.voice = Some(voice);
    }

    pub fn is_assistant_listening(&self) -> bool {
        self.voice.as_ref().is_some_and(VoiceLoop::is_listening)
    }

    pub(super) fn toggle_assistant(&mut self) {
        if !self.config.assistant.enabled {
            warn!("assistant is disabled in config");
            return;
        }
        match self.voice.as_mut() {
            Some(voice) => {
                let listening = voice.toggle();
                info!(listening, "assistant toggled");
            }
            None => warn!("no capture device attached to the assistant"),
        }
    }

    /// Wait for the assistant's current run to wind down.
    pub(super) async fn join_assistant(&mut self) {
        if let Some(voice) = self.voice.as_mut() {
            voice.join().await;
        }
    }
}
