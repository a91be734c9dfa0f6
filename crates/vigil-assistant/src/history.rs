//! Conversation history: one system seed turn, then user/assistant pairs.

use crate::Message;

/// Ordered turns sent with every request.
///
/// Always starts with the system seed. Within a session turns are only
/// appended, and always as a user turn followed by an assistant turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// Drop everything but the seed turn.
    pub fn reset(&mut self) {
        self.messages.truncate(1);
    }

    /// Append one recognized utterance and the reply to it.
    pub fn push_exchange(&mut self, user: impl Into<String>, reply: impl Into<String>) {
        self.messages.push(Message::user(user));
        self.messages.push(Message::assistant(reply));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Never empty: the seed is always present.
    pub fn is_empty(&self) -> bool {
        false
    }
}
