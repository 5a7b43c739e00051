use super::*;

#[test]
fn default_config_matches_page_template() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.endpoint, "/api/chat");
    assert_eq!(cfg.root_id, "chat-root");
    assert_eq!(cfg.customer_name_id, "customer-name");
}

#[test]
fn endpoint_override_replaces_default() {
    let cfg = WidgetConfig::default().with_endpoint_override(Some(" /support/api/chat ".to_owned()));
    assert_eq!(cfg.endpoint, "/support/api/chat");
}

#[test]
fn blank_endpoint_override_keeps_default() {
    let cfg = WidgetConfig::default().with_endpoint_override(Some("   ".to_owned()));
    assert_eq!(cfg.endpoint, DEFAULT_CHAT_ENDPOINT);

    let cfg = WidgetConfig::default().with_endpoint_override(None);
    assert_eq!(cfg.endpoint, DEFAULT_CHAT_ENDPOINT);
}

#[test]
fn greeting_interpolates_name() {
    assert_eq!(greeting("Alex"), "Welcome, Alex! How can I assist you with your reservation today?");
}

#[test]
fn greeting_with_empty_name_is_still_emitted() {
    assert_eq!(greeting(""), "Welcome, ! How can I assist you with your reservation today?");
}
