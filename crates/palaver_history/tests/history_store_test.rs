//! Tests for the filesystem history store.

use palaver_core::{Chat, ChatEntry, Role};
use palaver_error::HistoryErrorKind;
use palaver_history::HistoryStore;
use tempfile::TempDir;
use uuid::Uuid;

#[test]
fn missing_file_loads_as_empty_history() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();

    let mut chat = Chat::new("What is ownership in Rust?");
    chat.push(ChatEntry::new(Role::Assistant, "Ownership is..."));
    store.save(&[chat.clone()]).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, vec![chat]);
}

#[test]
fn create_chat_prepends_and_titles_from_first_message() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();

    store.create_chat("first conversation").unwrap();
    let second = store.create_chat("second conversation").unwrap();

    let chats = store.load().unwrap();
    assert_eq!(chats.len(), 2);
    assert_eq!(chats[0].id, second.id);
    assert_eq!(chats[0].title, "second conversation");
    assert_eq!(chats[0].entries[0].role, Role::User);
}

#[test]
fn long_first_message_truncates_title() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();

    let long = "a".repeat(80);
    let chat = store.create_chat(&long).unwrap();

    assert_eq!(chat.title.len(), 53);
    assert!(chat.title.ends_with("..."));
    // The full message is still recorded
    assert_eq!(chat.entries[0].content.len(), 80);
}

#[test]
fn append_entry_extends_the_right_chat() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();

    let other = store.create_chat("other").unwrap();
    let target = store.create_chat("target").unwrap();

    store
        .append_entry(target.id, ChatEntry::new(Role::Assistant, "reply"))
        .unwrap();

    let found = store.find(target.id).unwrap();
    assert_eq!(found.entries.len(), 2);
    assert_eq!(found.entries[1].content, "reply");
    assert_eq!(store.find(other.id).unwrap().entries.len(), 1);
}

#[test]
fn append_to_unknown_chat_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();

    let err = store
        .append_entry(Uuid::new_v4(), ChatEntry::new(Role::User, "hi"))
        .unwrap_err();

    assert!(matches!(err.kind(), HistoryErrorKind::ChatNotFound(_)));
}

#[test]
fn delete_chat_removes_only_that_chat() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();

    let keep = store.create_chat("keep").unwrap();
    let gone = store.create_chat("gone").unwrap();

    store.delete_chat(gone.id).unwrap();

    let chats = store.load().unwrap();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].id, keep.id);

    let err = store.delete_chat(gone.id).unwrap_err();
    assert!(matches!(err.kind(), HistoryErrorKind::ChatNotFound(_)));
}

#[test]
fn corrupt_file_surfaces_serde_error() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();

    std::fs::write(store.path(), "{ not json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err.kind(), HistoryErrorKind::Serde(_)));
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();

    store.save(&[Chat::new("hello")]).unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["chats.json"]);
}
