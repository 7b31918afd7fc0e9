use super::*;

#[test]
fn default_assets_are_empty() {
    let assets = AssetsState::default();
    assert_eq!(assets.count(), 0);
}

#[test]
fn replace_swaps_the_whole_list() {
    let mut assets = AssetsState::default();
    assets.replace(vec![serde_json::json!({"url": "a.png"})]);

    assets.replace(vec![
        serde_json::json!({"url": "b.png"}),
        serde_json::json!({"url": "c.png"}),
    ]);
    assert_eq!(assets.count(), 2);
    assert_eq!(assets.items[0]["url"], "b.png");
}
