//! Terminal rendering of assistant events.

use vigil_assistant::{AssistantEvent, Role, LISTENING_GREETING};

/// One transcript line for `event`.
pub fn event_line(event: &AssistantEvent) -> String {
    match event {
        AssistantEvent::Status(status) => format!("  [{}]", status.label()),
        AssistantEvent::TranscriptCleared => format!("assistant: {LISTENING_GREETING}"),
        AssistantEvent::Turn(message) => match message.role {
            Role::User => format!("you: {}", message.content),
            Role::Assistant | Role::System => format!("assistant: {}", message.content),
        },
        AssistantEvent::DeviceError(reason) => format!("microphone error: {reason}"),
    }
}

pub fn print_event(event: &AssistantEvent) {
    let now = chrono::Local::now().format("%H:%M:%S");
    println!("{now} {}", event_line(event));
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_assistant::{AssistantStatus, Message};

    #[test]
    fn renders_transcript_lines() {
        assert_eq!(
            event_line(&AssistantEvent::TranscriptCleared),
            "assistant: I'm listening..."
        );
        assert_eq!(
            event_line(&AssistantEvent::Turn(Message::user("help"))),
            "you: help"
        );
        assert_eq!(
            event_line(&AssistantEvent::Turn(Message::assistant("On my way"))),
            "assistant: On my way"
        );
        assert_eq!(
            event_line(&AssistantEvent::Status(AssistantStatus::Retrying)),
            "  [Retrying...]"
        );
    }
}
