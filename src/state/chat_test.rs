use super::*;

fn message(n: usize) -> ChatMessage {
    ChatMessage {
        id: format!("m-{n}"),
        player_name: "Ann".to_owned(),
        text: format!("message {n}"),
        timestamp: 1_000.0 + n as f64,
    }
}

fn enabled_state() -> ChatState {
    let mut state = ChatState::default();
    state.initialize(&FeatureFlags { chat: true });
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_uninitialized_and_disabled() {
    let state = ChatState::default();
    assert!(!state.initialized);
    assert!(!state.enabled);
    assert!(state.messages.is_empty());
}

#[test]
fn chat_state_default_panel_is_expanded() {
    let state = ChatState::default();
    assert!(state.visible);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_enables_chat_when_flag_is_on() {
    let mut state = ChatState::default();
    assert!(state.initialize(&FeatureFlags { chat: true }));
    assert!(state.initialized);
    assert!(state.enabled);
}

#[test]
fn initialize_with_flag_off_stays_disabled_for_the_session() {
    let mut state = ChatState::default();
    assert!(!state.initialize(&FeatureFlags { chat: false }));
    assert!(state.initialized);
    assert!(!state.enabled);

    // A later payload with the flag on must not revive the widget.
    assert!(!state.initialize(&FeatureFlags { chat: true }));
    assert!(!state.enabled);
}

#[test]
fn initialize_is_idempotent() {
    let mut state = ChatState::default();
    assert!(state.initialize(&FeatureFlags { chat: true }));
    assert!(!state.initialize(&FeatureFlags { chat: true }));
    assert!(state.enabled);
}

// =============================================================
// toggle_visibility
// =============================================================

#[test]
fn toggle_visibility_twice_returns_to_original_state() {
    let mut state = ChatState::default();
    let original = state.visible;
    state.toggle_visibility();
    assert_eq!(state.visible, !original);
    state.toggle_visibility();
    assert_eq!(state.visible, original);
}

// =============================================================
// push_message
// =============================================================

#[test]
fn push_message_appends_in_arrival_order() {
    let mut state = enabled_state();
    state.push_message(message(1));
    state.push_message(message(2));
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].text, "message 1");
    assert_eq!(state.messages[1].text, "message 2");
}

#[test]
fn push_message_is_ignored_while_disabled() {
    let mut state = ChatState::default();
    state.push_message(message(1));
    assert!(state.messages.is_empty());
}

#[test]
fn push_message_evicts_oldest_beyond_history_limit() {
    let mut state = enabled_state();
    for n in 0..=MESSAGE_HISTORY_LIMIT {
        state.push_message(message(n));
    }
    assert_eq!(state.messages.len(), MESSAGE_HISTORY_LIMIT);
    // Message 0 was evicted; the window is 1..=50.
    assert_eq!(state.messages[0].text, "message 1");
    assert_eq!(
        state.messages[MESSAGE_HISTORY_LIMIT - 1].text,
        format!("message {MESSAGE_HISTORY_LIMIT}")
    );
}

#[test]
fn push_message_keeps_markup_as_literal_text() {
    let mut state = enabled_state();
    state.push_message(ChatMessage {
        id: "m-x".to_owned(),
        player_name: "Mallory".to_owned(),
        text: "<script>alert('hi')</script>".to_owned(),
        timestamp: 0.0,
    });
    assert_eq!(state.messages[0].text, "<script>alert('hi')</script>");
}
