use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.is_waiting());
}

// =============================================================
// Transcript ordering
// =============================================================

#[test]
fn push_appends_in_order() {
    let mut state = ChatState::default();
    state.push(ChatMessage::new("first", Origin::User));
    state.push(ChatMessage::new("second", Origin::Assistant));

    let texts: Vec<&str> = state.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[test]
fn finish_transmit_decrements_pending_and_appends() {
    let mut state = ChatState::default();
    state.begin_transmit();
    state.begin_transmit();
    assert_eq!(state.pending, 2);

    state.finish_transmit(ChatMessage::new("reply", Origin::Assistant));
    assert_eq!(state.pending, 1);
    assert!(state.is_waiting());
    assert_eq!(state.messages.last().map(|m| m.origin), Some(Origin::Assistant));
}

#[test]
fn finish_transmit_never_underflows() {
    let mut state = ChatState::default();
    state.finish_transmit(ChatMessage::new("late", Origin::Error));
    assert_eq!(state.pending, 0);
    assert_eq!(state.messages.len(), 1);
}

// =============================================================
// Origin
// =============================================================

#[test]
fn origin_css_classes() {
    assert_eq!(Origin::User.css_class(), "user-message");
    assert_eq!(Origin::Assistant.css_class(), "assistant-message");
    assert_eq!(Origin::Error.css_class(), "error-message");
}

#[test]
fn origin_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Origin::Assistant).unwrap(), serde_json::json!("assistant"));
}
