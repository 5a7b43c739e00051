#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

/// Who a transcript entry is attributed to. Only affects styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
    Error,
}

impl Origin {
    /// CSS modifier class used by the page stylesheet.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Assistant => "assistant-message",
            Self::Error => "error-message",
        }
    }
}

/// A single transcript entry. Never edited once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub origin: Origin,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, origin: Origin) -> Self {
        Self { text: text.into(), origin }
    }
}

/// The transcript plus the number of transmits still awaiting a reply.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: usize,
}

impl ChatState {
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn begin_transmit(&mut self) {
        self.pending += 1;
    }

    /// Close out one transmit and append its outcome in the same update.
    pub fn finish_transmit(&mut self, outcome: ChatMessage) {
        self.pending = self.pending.saturating_sub(1);
        self.messages.push(outcome);
    }

    pub fn is_waiting(&self) -> bool {
        self.pending > 0
    }
}
