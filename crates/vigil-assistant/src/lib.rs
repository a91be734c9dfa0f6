//! Voice assistant engine for Vigil.
//!
//! Runs the turn-based listening loop:
//! - capture a fixed-length clip from the microphone
//! - send it with the conversation history to the voice endpoint
//! - render the recognized utterance and the reply
//! - play synthesized speech, then listen again
//!
//! Devices and the endpoint sit behind traits so the loop can be driven by
//! a browser bridge, a headless CLI, or test doubles.

pub mod backend;
pub mod device;
pub mod history;
pub mod session;
pub mod voice_loop;

pub use backend::{HttpVoiceBackend, ReplyOutcome, VoiceBackend, VoiceReply};
pub use device::{ActiveCapture, AudioClip, AudioPlayer, CaptureDevice};
pub use history::ConversationHistory;
pub use session::{AssistantSession, Phase, SessionTicket};
pub use voice_loop::{AssistantEvent, AssistantStatus, LoopTiming, VoiceLoop, LISTENING_GREETING};

use vigil_common::DeviceError;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// The request never produced a usable HTTP response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The endpoint answered with a failure status or an `error` field.
    #[error("backend error: {0}")]
    Backend(String),
    /// The response body could not be understood.
    #[error("decode error: {0}")]
    Decode(String),
    #[error(transparent)]
    Device(#[from] DeviceError),
}
