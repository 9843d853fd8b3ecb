// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for store

use serde_json::json;
use socialmedia_core::*;
use tempfile::tempdir;

#[test]
fn test_memory_store_round_trip() {
    let store = MemoryStore::new();
    let record = json!({"facebook": {"link": "x", "weight": 1}});

    assert_eq!(store.load(BlockKind::Follow, "footer").unwrap(), None);
    store.save(BlockKind::Follow, "footer", &record).unwrap();

    assert_eq!(store.load(BlockKind::Follow, "footer").unwrap(), Some(record));
    assert!(!store.exists(BlockKind::Share, "footer").unwrap());
}

#[test]
fn test_memory_store_delete() {
    let store = MemoryStore::new();
    store.save(BlockKind::Share, "sidebar", &json!({})).unwrap();

    store.delete(BlockKind::Share, "sidebar").unwrap();
    store.delete(BlockKind::Share, "sidebar").unwrap();

    assert!(!store.exists(BlockKind::Share, "sidebar").unwrap());
}

#[test]
fn test_empty_block_id_rejected() {
    let store = MemoryStore::new();
    let result = store.save(BlockKind::Follow, "  ", &json!({}));
    assert!(matches!(result, Err(StoreError::InvalidBlockId(_))));
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("config"));
    let record = json!({"mail": {"enabled": true, "weight": 2}});

    assert_eq!(store.load(BlockKind::Share, "footer").unwrap(), None);
    store.save(BlockKind::Share, "footer", &record).unwrap();

    assert!(dir.path().join("config/share/footer.json").exists());
    assert_eq!(store.load(BlockKind::Share, "footer").unwrap(), Some(record));
}

#[test]
fn test_file_store_rejects_path_characters() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());

    for id in ["../escape", "a.b", "a/b", "caf\u{e9}"] {
        let result = store.save(BlockKind::Follow, id, &json!({}));
        assert!(
            matches!(result, Err(StoreError::InvalidBlockId(_))),
            "{:?} accepted",
            id
        );
    }
    assert!(!dir.path().join("follow").exists());
}

#[test]
fn test_similar_block_ids_stay_separate() {
    let dir = tempdir().unwrap();
    let file_store = FileStore::new(dir.path());
    let memory_store = MemoryStore::new();
    let stores: [&dyn ConfigStore; 2] = [&file_store, &memory_store];

    for store in stores {
        let a = json!({"facebook": {"link": "A", "weight": 0}});
        let b = json!({"facebook": {"link": "B", "weight": 0}});

        assert!(store.save(BlockKind::Follow, "a.b", &a).is_err());
        store.save(BlockKind::Follow, "a_b", &a).unwrap();
        store.save(BlockKind::Follow, "a-b", &b).unwrap();

        assert_eq!(store.load(BlockKind::Follow, "a_b").unwrap(), Some(a));
        assert_eq!(store.load(BlockKind::Follow, "a-b").unwrap(), Some(b));
        assert!(store.load(BlockKind::Follow, "a.b").is_err());
    }
}

#[test]
fn test_file_store_delete_missing_is_ok() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());

    assert!(store.delete(BlockKind::Follow, "never-saved").is_ok());
}

#[test]
fn test_file_store_reports_corrupt_record() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());
    std::fs::create_dir_all(dir.path().join("follow")).unwrap();
    std::fs::write(dir.path().join("follow/footer.json"), "{oops").unwrap();

    let result = store.load(BlockKind::Follow, "footer");
    assert!(matches!(result, Err(StoreError::Serialization(_))));
}
