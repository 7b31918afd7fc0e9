use super::*;

// =============================================================
// Defaults and any()
// =============================================================

#[test]
fn default_flags_are_all_clear() {
    let flags = BusyFlags::default();
    assert!(!flags.any());
}

#[test]
fn any_is_true_when_any_single_flag_is_set() {
    for kind in [MutationKind::Undo, MutationKind::Redo, MutationKind::ChatUpdate] {
        let mut flags = BusyFlags::default();
        flags.set(kind);
        assert!(flags.any(), "{kind:?} should make flags busy");
    }

    let flags = BusyFlags { code: true, ..BusyFlags::default() };
    assert!(flags.any());
}

// =============================================================
// Per-kind set/clear
// =============================================================

#[test]
fn flags_are_independent_per_kind() {
    let mut flags = BusyFlags::default();
    flags.set(MutationKind::Undo);
    flags.set(MutationKind::ChatUpdate);

    assert!(flags.is_set(MutationKind::Undo));
    assert!(flags.is_set(MutationKind::ChatUpdate));
    assert!(!flags.is_set(MutationKind::Redo));

    flags.clear(MutationKind::Undo);
    assert!(!flags.is_set(MutationKind::Undo));
    assert!(flags.is_set(MutationKind::ChatUpdate));
}

#[test]
fn local_edit_is_never_busy() {
    let mut flags = BusyFlags::default();
    flags.set(MutationKind::LocalEdit);

    assert!(!flags.is_set(MutationKind::LocalEdit));
    assert!(!flags.any());
}
