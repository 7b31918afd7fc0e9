use super::*;

#[test]
fn site_file_url_targets_the_project_document() {
    assert_eq!(site_file_url("my-site"), "/api/sites/my-site/index.html");
}

#[test]
fn preview_url_varies_with_the_reload_epoch() {
    let before = preview_url("my-site", 3);
    let after = preview_url("my-site", 4);
    assert_ne!(before, after);
    assert!(before.starts_with("/site/my-site/"));
}

#[test]
fn export_url_targets_the_export_endpoint() {
    assert_eq!(export_url("my-site"), "/api/sites/my-site/export");
}
