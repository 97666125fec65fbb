//! File-backed storage round-trips.

#![allow(clippy::unwrap_used)]

use eventhub_app::{AppStorage, JsonFileStore, KeyValueStore, Role, User, UserId, seed};
use std::sync::Arc;

fn file_storage(dir: &std::path::Path) -> AppStorage {
    AppStorage::new(Arc::new(JsonFileStore::open(dir).unwrap()))
}

#[test]
fn fresh_directory_yields_seed_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let storage = file_storage(dir.path());

    assert_eq!(storage.load_events(), seed::initial_events());
}

#[test]
fn events_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();

    let mut events = seed::initial_events();
    events[1].ticket_types[0].sold += 3;
    file_storage(dir.path()).save_events(&events).unwrap();

    // A fresh handle over the same directory sees the same collection
    let reopened = file_storage(dir.path());
    assert_eq!(reopened.load_events(), events);
}

#[test]
fn corrupt_blob_degrades_to_seed_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let kv = JsonFileStore::open(dir.path()).unwrap();
    kv.put("eh_events", "not json").unwrap();

    let storage = AppStorage::new(Arc::new(kv));
    assert_eq!(storage.load_events(), seed::initial_events());
}

#[test]
fn session_blob_lifecycle_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let storage = file_storage(dir.path());

    assert!(storage.load_session().is_none());

    let user = User {
        id: UserId::new(),
        name: "erin".to_string(),
        email: "erin@example.com".to_string(),
        role: Role::User,
    };
    storage.save_session(&user).unwrap();

    assert_eq!(file_storage(dir.path()).load_session(), Some(user));

    storage.clear_session().unwrap();
    assert!(storage.load_session().is_none());

    // Clearing twice is fine
    storage.clear_session().unwrap();
}
