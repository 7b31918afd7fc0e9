use super::*;

// =============================================================
// Load transitions
// =============================================================

#[test]
fn default_document_is_empty_and_clean() {
    let doc = Document::default();
    assert_eq!(doc.content, "");
    assert!(!doc.dirty);
    assert!(!doc.loading);
}

#[test]
fn finish_load_enters_ready_clean() {
    let mut doc = Document::default();
    doc.begin_load();
    assert!(doc.loading);

    doc.finish_load("<html>A</html>".to_owned());
    assert_eq!(doc.content, "<html>A</html>");
    assert!(!doc.dirty);
    assert!(!doc.loading);
}

#[test]
fn fail_load_falls_back_to_empty_ready_clean() {
    let mut doc = Document {
        content: "stale".to_owned(),
        dirty: true,
        loading: true,
    };

    doc.fail_load();
    assert_eq!(doc.content, "");
    assert!(!doc.dirty);
    assert!(!doc.loading);
}

// =============================================================
// Dirty tracking
// =============================================================

#[test]
fn local_edits_mark_dirty_and_stay_dirty() {
    let mut doc = Document::default();
    doc.finish_load("<html>A</html>".to_owned());

    doc.apply_local_edit("<html>B</html>".to_owned());
    assert!(doc.dirty);

    doc.apply_local_edit("<html>C</html>".to_owned());
    assert!(doc.dirty);
    assert_eq!(doc.content, "<html>C</html>");
}

#[test]
fn mark_saved_clears_dirty_without_touching_content() {
    let mut doc = Document::default();
    doc.apply_local_edit("<html>B</html>".to_owned());

    doc.mark_saved();
    assert!(!doc.dirty);
    assert_eq!(doc.content, "<html>B</html>");
}

#[test]
fn accept_remote_overwrites_local_edits_and_clears_dirty() {
    let mut doc = Document::default();
    doc.apply_local_edit("<html>local</html>".to_owned());

    doc.accept_remote("<html>remote</html>".to_owned());
    assert_eq!(doc.content, "<html>remote</html>");
    assert!(!doc.dirty);
}
