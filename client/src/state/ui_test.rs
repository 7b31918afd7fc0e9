use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_defaults_to_chat_tab_not_saving() {
    let state = UiState::default();
    assert_eq!(state.active_tab, EditorTab::Chat);
    assert!(!state.saving);
}

// =============================================================
// EditorTab deployment mask
// =============================================================

#[test]
fn only_chat_tab_survives_deployment() {
    assert!(EditorTab::Chat.available_while_deploying());
    assert!(!EditorTab::Code.available_while_deploying());
    assert!(!EditorTab::Domain.available_while_deploying());
}
