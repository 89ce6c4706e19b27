//! Tests for the in-memory portfolio gallery.

use quizfolio::{ALL_TAG, GalleryStore, WebsiteDraft, WebsiteField, parse_tags, seed_websites};

fn draft(title: &str, tags: &[&str]) -> WebsiteDraft {
    WebsiteDraft::new(
        title.to_string(),
        format!("About {title}"),
        "https://picsum.photos/400/300".to_string(),
        "https://example.com".to_string(),
        tags.iter().map(|t| t.to_string()).collect(),
    )
}

#[test]
fn test_seed_has_six_projects() {
    let seed = seed_websites();
    assert_eq!(seed.len(), 6);
    let ids: Vec<i64> = seed.iter().map(|w| *w.id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_seeded_tags_in_first_seen_order() {
    let store = GalleryStore::seeded();
    let tags = store.available_tags();
    assert_eq!(tags[0], ALL_TAG);
    assert_eq!(&tags[1..4], ["RPG", "Unreal Engine", "Action"]);
    assert_eq!(tags.iter().filter(|t| *t == "Unity").count(), 1);
}

#[test]
fn test_add_prepends_with_fresh_id() {
    let mut store = GalleryStore::seeded();
    let id = store.add(draft("Neon Drift", &["Racing"]));
    assert_eq!(store.len(), 7);
    assert_eq!(*store.websites()[0].id(), id);
    assert!(seed_websites().iter().all(|w| *w.id() != id));
}

#[test]
fn test_add_then_remove_restores_collection() {
    let mut store = GalleryStore::seeded();
    let before = store.websites().to_vec();
    let id = store.add(draft("Temp", &["Racing"]));
    let removed = store.remove(id).expect("Card should exist");
    assert_eq!(removed.title(), "Temp");
    assert_eq!(store.websites(), before.as_slice());
    assert!(!store.available_tags().contains(&"Racing".to_string()));
}

#[test]
fn test_update_keeps_id_and_position() {
    let mut store = GalleryStore::seeded();
    let position = store.websites().iter().position(|w| *w.id() == 3).unwrap();
    assert!(store.update(3, draft("Renamed", &["Strategy"])));
    let website = &store.websites()[position];
    assert_eq!(*website.id(), 3);
    assert_eq!(website.title(), "Renamed");
    assert_eq!(store.len(), 6);
}

#[test]
fn test_missing_id_is_noop() {
    let mut store = GalleryStore::seeded();
    let before = store.websites().to_vec();
    assert!(!store.update(999, draft("Ghost", &[])));
    assert!(store.remove(999).is_none());
    assert!(store.get(999).is_none());
    assert_eq!(store.websites(), before.as_slice());
}

#[test]
fn test_save_adds_or_updates() {
    let mut store = GalleryStore::seeded();
    let new_id = store.save(None, draft("Fresh", &[])).expect("Add returns an id");
    assert_eq!(store.get(new_id).unwrap().title(), "Fresh");

    assert_eq!(store.save(Some(1), draft("Edited", &["RPG"])), Some(1));
    assert_eq!(store.get(1).unwrap().title(), "Edited");

    assert_eq!(store.save(Some(424242), draft("Lost", &[])), None);
}

#[test]
fn test_filter_by_tag() {
    let store = GalleryStore::seeded();
    assert_eq!(store.filter_by_tag(ALL_TAG).len(), 6);
    let unity: Vec<i64> = store.filter_by_tag("Unity").iter().map(|w| *w.id()).collect();
    assert_eq!(unity, vec![2, 6]);
    assert!(store.filter_by_tag("Nonexistent").is_empty());
}

#[test]
fn test_available_tags_never_orphaned() {
    let mut store = GalleryStore::seeded();
    store.remove(6);
    store.update(2, draft("Jumper", &["Platformer"]));
    for tag in store.available_tags().iter().skip(1) {
        assert!(!store.filter_by_tag(tag).is_empty(), "orphan tag {tag}");
    }
    assert!(!store.available_tags().contains(&"Unity".to_string()));
}

#[test]
fn test_active_filter_resets_when_tag_vanishes() {
    let mut store = GalleryStore::seeded();
    assert!(store.select_tag("VR"));
    assert_eq!(store.visible().len(), 1);

    store.remove(6);
    assert_eq!(store.active_tag(), ALL_TAG);
    assert_eq!(store.visible().len(), 5);
}

#[test]
fn test_active_filter_kept_while_tag_survives() {
    let mut store = GalleryStore::seeded();
    store.select_tag("Mobile");
    store.remove(2);
    assert_eq!(store.active_tag(), "Mobile");
    assert_eq!(store.visible().len(), 1);
}

#[test]
fn test_unknown_tag_selection_ignored() {
    let mut store = GalleryStore::seeded();
    store.select_tag("Puzzle");
    assert!(!store.select_tag("Cooking"));
    assert_eq!(store.active_tag(), "Puzzle");
}

#[test]
fn test_empty_gallery() {
    let store = GalleryStore::new(Vec::new());
    assert!(store.is_empty());
    assert_eq!(store.available_tags(), vec![ALL_TAG.to_string()]);
    assert!(store.visible().is_empty());
}

#[test]
fn test_draft_validation() {
    assert!(draft("Ok", &[]).validate().is_ok());

    let mut missing_url = draft("Ok", &[]);
    missing_url.url = "  ".to_string();
    let err = missing_url.validate().unwrap_err();
    assert_eq!(err.message, "URL is required");
    assert_eq!(err.field, WebsiteField::Url);

    let err = WebsiteDraft::default().validate().unwrap_err();
    assert_eq!(err.message, "title is required");
}

#[test]
fn test_parse_tags() {
    assert_eq!(parse_tags("Unity, Mobile ,,  VR"), vec!["Unity", "Mobile", "VR"]);
    assert!(parse_tags(" , ").is_empty());
    assert!(parse_tags("").is_empty());
}

#[test]
fn test_tag_order_stable_across_add_and_update() {
    let mut store = GalleryStore::seeded();
    let before = store.available_tags();

    store.add(draft("Another Unity Game", &["Unity", "Action"]));
    assert_eq!(store.available_tags(), before);

    store.update(4, draft("Color Cube", &["Web", "Puzzle", "WebGL"]));
    assert_eq!(store.available_tags(), before);
}

#[test]
fn test_new_tags_are_appended() {
    let mut store = GalleryStore::seeded();
    let before = store.available_tags();

    store.add(draft("Neon Drift", &["Unity", "Racing"]));
    let after = store.available_tags();
    assert_eq!(&after[..before.len()], before.as_slice());
    assert_eq!(after.last().map(String::as_str), Some("Racing"));

    store.update(1, draft("Project Oblivion", &["Horror", "RPG"]));
    let after = store.available_tags();
    assert_eq!(after.last().map(String::as_str), Some("Horror"));
    assert!(!after.contains(&"Unreal Engine".to_string()));
}
