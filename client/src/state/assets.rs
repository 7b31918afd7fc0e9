#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

/// Attachment descriptors owned by the upload collaborator.
///
/// The sync core never interprets these: it stores them opaquely, exposes
/// the count for the tab badge, and passes the list through to the chat
/// surface. Refresh is skipped while a deployment is in progress.
#[derive(Clone, Debug, Default)]
pub struct AssetsState {
    pub items: Vec<serde_json::Value>,
}

impl AssetsState {
    /// Number of attachments, used for display gating only.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Replace the list wholesale after a collaborator refresh.
    pub fn replace(&mut self, items: Vec<serde_json::Value>) {
        self.items = items;
    }
}
