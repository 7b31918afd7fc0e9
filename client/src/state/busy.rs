#[cfg(test)]
#[path = "busy_test.rs"]
mod busy_test;

use crate::net::types::MutationKind;

/// Per-producer in-flight markers, one per non-local mutation source.
///
/// Each flag is true from request-send to result-receipt and gates duplicate
/// dispatch of its own kind. Different kinds may overlap; content conflicts
/// resolve last-writer-wins. `code` marks an unsolicited full-content push
/// being applied and is settled by a short view-layer pulse rather than a
/// request/result pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusyFlags {
    pub undoing: bool,
    pub redoing: bool,
    pub chat: bool,
    pub code: bool,
}

impl BusyFlags {
    /// True when any producer has an outstanding request. Drives the
    /// blocking preview overlay and disables explicit save.
    #[must_use]
    pub fn any(self) -> bool {
        self.undoing || self.redoing || self.chat || self.code
    }

    /// Whether the given kind already has an outstanding request.
    /// Local edits are synchronous and never busy.
    #[must_use]
    pub fn is_set(self, kind: MutationKind) -> bool {
        match kind {
            MutationKind::LocalEdit => false,
            MutationKind::ChatUpdate => self.chat,
            MutationKind::Undo => self.undoing,
            MutationKind::Redo => self.redoing,
        }
    }

    /// Mark the given kind outstanding. No-op for local edits.
    pub fn set(&mut self, kind: MutationKind) {
        if let Some(flag) = self.flag_mut(kind) {
            *flag = true;
        }
    }

    /// Clear the given kind's marker. No-op for local edits.
    pub fn clear(&mut self, kind: MutationKind) {
        if let Some(flag) = self.flag_mut(kind) {
            *flag = false;
        }
    }

    fn flag_mut(&mut self, kind: MutationKind) -> Option<&mut bool> {
        match kind {
            MutationKind::LocalEdit => None,
            MutationKind::ChatUpdate => Some(&mut self.chat),
            MutationKind::Undo => Some(&mut self.undoing),
            MutationKind::Redo => Some(&mut self.redoing),
        }
    }
}
