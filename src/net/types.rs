//! Wire schema for the chat endpoint.
//!
//! ERROR HANDLING
//! ==============
//! `SendError` keeps the cause for the console trace, but the transcript
//! treats every variant the same way: one fixed error entry.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Success body from `POST /api/chat`. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The request never produced a response.
    #[error("chat request failed: {0}")]
    Network(String),
    /// The server answered outside the 2xx range.
    #[error("chat request failed with status {0}")]
    Status(u16),
    /// The success body was not `{"reply": "..."}`.
    #[error("malformed chat response: {0}")]
    Decode(String),
    /// No browser to send from (native builds and tests).
    #[error("chat transport not available outside the browser")]
    Unavailable,
}

/// Map an HTTP status onto the success/failure split.
///
/// # Errors
///
/// Returns [`SendError::Status`] for anything outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), SendError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(SendError::Status(status)) }
}

/// Pull the reply text out of a success body.
///
/// # Errors
///
/// Returns [`SendError::Decode`] when the body is not valid JSON or lacks a
/// string `reply` field.
pub fn decode_reply(body: &str) -> Result<String, SendError> {
    serde_json::from_str::<ChatResponse>(body)
        .map(|resp| resp.reply)
        .map_err(|e| SendError::Decode(e.to_string()))
}
