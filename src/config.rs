//! Widget configuration: endpoint, page element ids, and fixed texts.
//!
//! The widget runs in the browser, so there is no environment to read.
//! Defaults match the support page template; the only override the page can
//! supply is `data-endpoint` on the root element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CHAT_ENDPOINT: &str = "/api/chat";
pub const DEFAULT_ROOT_ID: &str = "chat-root";
pub const DEFAULT_CUSTOMER_NAME_ID: &str = "customer-name";

/// Transcript entry shown for every failed transmit.
pub const SEND_FAILED_TEXT: &str = "Sorry, there was an error processing your request. Please try again.";

/// Opening assistant message for `customer_name`.
pub fn greeting(customer_name: &str) -> String {
    format!("Welcome, {customer_name}! How can I assist you with your reservation today?")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoint: String,
    pub root_id: String,
    pub customer_name_id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            root_id: DEFAULT_ROOT_ID.to_owned(),
            customer_name_id: DEFAULT_CUSTOMER_NAME_ID.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Replace the endpoint with a page-supplied value, ignoring blanks.
    #[must_use]
    pub fn with_endpoint_override(mut self, raw: Option<String>) -> Self {
        if let Some(endpoint) = raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            self.endpoint = endpoint;
        }
        self
    }
}
