//! Load, save and clear through the tree store

use pretty_assertions::assert_eq;
use pt_core::prelude::*;
use pt_test_utils::{sample_forest, store_with, ReadOnlyStore, SequentialIds};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn save_then_open_fresh_session_roundtrips() {
    let store = MemoryStore::new();
    let mut first = TreeStore::open(store.clone(), &EditorConfig::new()).unwrap();
    first.replace_tree(sample_forest());
    first.save().unwrap();

    let second = TreeStore::open(store, &EditorConfig::new()).unwrap();
    assert_eq!(second.load_state(), LoadState::LoadedFromStorage);
    assert_eq!(second.forest(), &sample_forest()[..]);
    assert_eq!(second.active_node_id(), None);
}

#[test]
fn deeply_nested_document_survives_reopen() {
    let store = MemoryStore::new();
    let mut first = TreeStore::with_id_generator(
        store.clone(),
        &EditorConfig::new(),
        SequentialIds::new(),
    )
    .unwrap();
    let mut parent = first.add_root();
    for _ in 0..120 {
        parent = first.add_child(&parent);
    }
    first.save().unwrap();

    let second = TreeStore::open(store, &EditorConfig::new()).unwrap();
    assert_eq!(second.load_state(), LoadState::LoadedFromStorage);
    assert_eq!(second.forest(), first.forest());
    assert_eq!(pt_tree::query::depth_of(second.forest(), &parent), Some(120));
}

#[test]
fn corrupt_storage_opens_empty() {
    let _ = pt_core::init_test_tracing();
    for raw in ["not-valid-json", "\"not-valid-json\"", "{}", "[{\"label\":\"root\"}]"] {
        let store = store_with(DEFAULT_STORAGE_KEY, raw);
        let session = TreeStore::open(store, &EditorConfig::new()).unwrap();
        assert!(session.forest().is_empty(), "raw value {raw:?}");
        assert_eq!(session.load_state(), LoadState::LoadedEmpty);
    }
}

#[test]
fn corrupt_value_is_left_in_place_until_overwritten() {
    let store = store_with(DEFAULT_STORAGE_KEY, "not-valid-json");
    let mut session = TreeStore::open(store.clone(), &EditorConfig::new()).unwrap();
    assert_eq!(
        store.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some("not-valid-json")
    );

    session.add_root();
    session.save().unwrap();
    assert_eq!(session.reload(), LoadState::LoadedFromStorage);
}

#[test]
fn hand_authored_document_loads_with_defaults() {
    let raw = r#"[
        {"id": "a", "label": "root", "value": "edge", "children": [
            {"id": "b", "label": "child", "value": "ge-0/0/0", "children": []}
        ]}
    ]"#;
    let session = TreeStore::open(store_with(DEFAULT_STORAGE_KEY, raw), &EditorConfig::new()).unwrap();

    let forest = session.forest();
    assert_eq!(forest[0].value, "edge");
    assert!(!forest[0].read_only);
    assert!(!forest[0].children[0].read_only);
}

#[test]
fn duplicate_ids_in_storage_are_loaded_as_is() {
    let raw = r#"[
        {"id": "x", "label": "root", "value": "first", "children": []},
        {"id": "x", "label": "root", "value": "second", "children": []}
    ]"#;
    let mut session = TreeStore::open(store_with(DEFAULT_STORAGE_KEY, raw), &EditorConfig::new()).unwrap();
    assert_eq!(session.forest().len(), 2);

    session.set_value(&NodeId::from("x"), "patched");
    assert_eq!(session.forest()[0].value, "patched");
    assert_eq!(session.forest()[1].value, "second");
}

#[test]
fn clear_empties_store_and_session() {
    let store = MemoryStore::new();
    let mut session = TreeStore::open(store.clone(), &EditorConfig::new()).unwrap();
    session.add_root();
    session.save().unwrap();

    session.clear().unwrap();
    assert!(session.forest().is_empty());
    assert_eq!(session.active_node_id(), None);
    assert!(store.is_empty());

    session.clear().unwrap();
}

#[test]
fn failed_save_is_reported_and_session_survives() {
    let mut session = TreeStore::with_id_generator(
        ReadOnlyStore::default(),
        &EditorConfig::new(),
        SequentialIds::new(),
    )
    .unwrap();
    let root = session.add_root();

    let err = session.save().unwrap_err();
    assert!(err.is_recoverable());
    assert!(err.to_string().contains("quota exceeded"));
    assert_eq!(session.forest().len(), 1);
    assert_eq!(session.active_node_id(), Some(&root));
}

#[test]
fn failed_clear_keeps_session() {
    let mut session = TreeStore::open(ReadOnlyStore::default(), &EditorConfig::new()).unwrap();
    session.add_root();
    assert!(session.clear().is_err());
    assert_eq!(session.forest().len(), 1);
    assert!(session.active_node_id().is_some());
}

#[test]
fn custom_key_and_pretty_output() {
    let store = MemoryStore::new();
    let config = EditorConfig::new()
        .with_storage_key("lab-switch")
        .with_pretty_json(true);
    let mut session = TreeStore::open(store.clone(), &config).unwrap();
    session.replace_tree(sample_forest());
    session.save().unwrap();

    assert_eq!(session.repository().key(), "lab-switch");
    assert!(store.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    let raw = store.get("lab-switch").unwrap().unwrap();
    assert!(raw.contains("\n  "));

    let decoded: Forest = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, sample_forest());
}

#[test]
fn file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut session = TreeStore::open(store, &EditorConfig::new()).unwrap();
        session.replace_tree(sample_forest());
        session.save().unwrap();
    }

    let store = FileStore::open(dir.path()).unwrap();
    let session = TreeStore::open(store, &EditorConfig::new()).unwrap();
    assert_eq!(session.forest(), &sample_forest()[..]);
}

#[test]
fn file_store_rejects_unrepresentable_key() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let config = EditorConfig::new().with_storage_key("../escape");

    // Loading swallows the failure; saving reports it.
    let session = TreeStore::open(store, &config).unwrap();
    let err = session.save().unwrap_err();
    assert!(!err.is_recoverable());
}

#[test]
fn sessions_share_a_store_through_arc() {
    let shared: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let mut writer = TreeStore::open(Arc::clone(&shared), &EditorConfig::new()).unwrap();
    writer.replace_tree(sample_forest());
    writer.save().unwrap();

    let reader = TreeStore::open(shared, &EditorConfig::new()).unwrap();
    assert_eq!(reader.forest(), writer.forest());
}

#[test]
fn config_from_toml_drives_session() {
    let config = EditorConfig::from_toml_str(
        r#"
        storage_key = "rack-7"
        pretty_json = false
        "#,
    )
    .unwrap();
    let store = MemoryStore::new();
    let mut session = TreeStore::open(store.clone(), &config).unwrap();
    session.add_root();
    session.save().unwrap();
    assert!(store.get("rack-7").unwrap().is_some());
}
