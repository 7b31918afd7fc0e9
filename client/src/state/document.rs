#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

/// The single editable artifact: the site's markup source.
///
/// Owned exclusively by the sync engine. `dirty` is true after any unsaved
/// local edit and cleared on save or on acceptance of a remote result;
/// `loading` is true only during the initial fetch.
///
/// State machine: `Loading → Ready`, and within Ready `Clean ⇄ Dirty`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub content: String,
    pub dirty: bool,
    pub loading: bool,
}

impl Document {
    /// Enter the `Loading` state ahead of the initial fetch.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// `Loading → Ready/Clean` on a successful initial fetch.
    pub fn finish_load(&mut self, content: String) {
        self.content = content;
        self.dirty = false;
        self.loading = false;
    }

    /// `Loading → Ready/Clean` with an empty document after a failed fetch.
    /// The load never blocks the page; the caller surfaces the error once.
    pub fn fail_load(&mut self) {
        self.content.clear();
        self.dirty = false;
        self.loading = false;
    }

    /// `Clean → Dirty` on any local edit. Synchronous, always accepted.
    pub fn apply_local_edit(&mut self, text: String) {
        self.content = text;
        self.dirty = true;
    }

    /// Accept a remote replacement (chat update, undo, redo, code push).
    /// Overwrites local edits unconditionally: last writer wins, no merge.
    pub fn accept_remote(&mut self, content: String) {
        self.content = content;
        self.dirty = false;
    }

    /// `Dirty → Clean` after an acknowledged explicit save.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}
