//! What the loop tells the UI.

use serde::Serialize;

use crate::Message;

/// Greeting shown when a fresh conversation starts.
pub const LISTENING_GREETING: &str = "I'm listening...";

/// Status line shown next to the assistant control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssistantStatus {
    Inactive,
    Listening,
    Processing,
    Thinking,
    Speaking,
    Retrying,
    MicError,
}

impl AssistantStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssistantStatus::Inactive => "Inactive",
            AssistantStatus::Listening => "Listening...",
            AssistantStatus::Processing => "Processing...",
            AssistantStatus::Thinking => "Thinking...",
            AssistantStatus::Speaking => "Speaking...",
            AssistantStatus::Retrying => "Retrying...",
            AssistantStatus::MicError => "Mic Error",
        }
    }

    /// Style hint for the status dot; empty means the neutral dot.
    pub fn indicator(&self) -> &'static str {
        match self {
            AssistantStatus::Listening => "listening",
            AssistantStatus::Processing
            | AssistantStatus::Thinking
            | AssistantStatus::Retrying => "processing",
            AssistantStatus::Speaking => "speaking",
            AssistantStatus::Inactive | AssistantStatus::MicError => "",
        }
    }
}

/// Events emitted by the voice loop for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum AssistantEvent {
    Status(AssistantStatus),
    /// A new conversation started; the transcript shows only the greeting.
    TranscriptCleared,
    /// A turn to render, in conversation order.
    Turn(Message),
    /// The microphone could not be opened; the session has ended.
    DeviceError(String),
}
