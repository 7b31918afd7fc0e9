#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the editing page: active tab and save-in-flight marker.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: EditorTab,
    /// True while an explicit save round-trip is outstanding.
    pub saving: bool,
}

/// Tabs on the editing side of the page.
///
/// `Code` and `Domain` are editing surfaces and are hidden while a
/// deployment is in progress; `Chat` stays available throughout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorTab {
    #[default]
    Chat,
    Code,
    Domain,
}

impl EditorTab {
    /// Whether this tab survives the deployment capability mask.
    #[must_use]
    pub fn available_while_deploying(self) -> bool {
        self == Self::Chat
    }
}
