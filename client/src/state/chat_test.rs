use super::*;

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
}

#[test]
fn push_user_records_role_and_content_in_order() {
    let mut state = ChatState::default();
    state.push_user("make it blue");
    state.push_status("assistant", "Updated your site");

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, "user");
    assert_eq!(state.messages[0].content, "make it blue");
    assert_eq!(state.messages[1].role, "assistant");
}
