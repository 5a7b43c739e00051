//! Chat transport: the one network round trip the widget makes.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `HttpTransport` resolves to `SendError::Unavailable`, so the
//! rest of the crate compiles and tests without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::SendError;
#[cfg(feature = "csr")]
use super::types::{ChatRequest, check_status, decode_reply};
use crate::config::DEFAULT_CHAT_ENDPOINT;

/// Sends one user message and resolves to the reply text.
///
/// The returned future is driven on the browser's single thread, so it is not
/// required to be `Send`.
pub trait ChatTransport: Clone + 'static {
    fn send(&self, message: &str) -> impl Future<Output = Result<String, SendError>>;
}

/// `POST {endpoint}` with `{"message": ...}`, expecting `{"reply": ...}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_CHAT_ENDPOINT)
    }
}

impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> Result<String, SendError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(&ChatRequest { message })
                .map_err(|e| SendError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| SendError::Network(e.to_string()))?;
            log::debug!("chat: {} responded {}", self.endpoint, resp.status());
            check_status(resp.status())?;
            let body = resp
                .text()
                .await
                .map_err(|e| SendError::Network(e.to_string()))?;
            decode_reply(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            leptos::logging::warn!("chat: {} unreachable, dropped {} byte message", self.endpoint, message.len());
            Err(SendError::Unavailable)
        }
    }
}
