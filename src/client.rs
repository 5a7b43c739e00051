//! Message flow between the transcript, the input field, and the server.
//!
//! DESIGN
//! ======
//! `ChatClient` never looks anything up on the page. It is handed the
//! transcript, the input field, and the transport at construction. The view
//! passes Leptos signals; tests pass in-memory handles.
//!
//! Transmits are fire-and-forget. `submit` hands back the pending transmit for
//! the caller to spawn, and does not wait on earlier ones. Replies land in
//! whatever order their responses resolve.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::future::Future;

use leptos::prelude::{RwSignal, Set, Update};

use crate::config::{SEND_FAILED_TEXT, greeting};
use crate::net::api::ChatTransport;
use crate::state::chat::{ChatMessage, ChatState, Origin};

/// Something that owns a [`ChatState`] and can apply a mutation to it.
pub trait TranscriptHandle: Clone + 'static {
    fn modify(&self, f: impl FnOnce(&mut ChatState));
}

/// The text input the user types into.
pub trait InputField: Clone + 'static {
    fn clear(&self);
}

impl TranscriptHandle for RwSignal<ChatState> {
    fn modify(&self, f: impl FnOnce(&mut ChatState)) {
        self.update(f);
    }
}

impl InputField for RwSignal<String> {
    fn clear(&self) {
        self.set(String::new());
    }
}

#[derive(Clone)]
pub struct ChatClient<R, I, T> {
    transcript: R,
    input: I,
    transport: T,
}

impl<R, I, T> ChatClient<R, I, T>
where
    R: TranscriptHandle,
    I: InputField,
    T: ChatTransport,
{
    pub fn new(transcript: R, input: I, transport: T) -> Self {
        Self { transcript, input, transport }
    }

    /// Post the opening assistant greeting. An empty name is not an error.
    pub fn initialize(&self, customer_name: &str) {
        self.append(greeting(customer_name), Origin::Assistant);
    }

    pub fn append(&self, text: impl Into<String>, origin: Origin) {
        let message = ChatMessage::new(text, origin);
        self.transcript.modify(|state| state.push(message));
    }

    /// Append the trimmed text as a user entry, clear the input, and return
    /// the transmit for the caller to spawn.
    ///
    /// Returns `None` without touching anything when the text is blank.
    pub fn submit(&self, text: &str) -> Option<impl Future<Output = ()> + use<R, I, T>> {
        let message = text.trim();
        if message.is_empty() {
            return None;
        }

        self.append(message, Origin::User);
        self.input.clear();
        Some(self.clone().transmit(message.to_owned()))
    }

    /// One round trip. Any failure becomes the fixed error entry.
    pub async fn transmit(self, message: String) {
        self.transcript.modify(ChatState::begin_transmit);

        let outcome = match self.transport.send(&message).await {
            Ok(reply) => ChatMessage::new(reply, Origin::Assistant),
            Err(e) => {
                leptos::logging::warn!("chat send failed: {e}");
                ChatMessage::new(SEND_FAILED_TEXT, Origin::Error)
            }
        };

        self.transcript.modify(|state| state.finish_transmit(outcome));
    }
}
