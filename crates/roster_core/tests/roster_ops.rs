use roster_core::{
    InMemoryStore, JsonFileStore, Roster, RosterError, StoreError, User, UserStore,
    ValidationError,
};
use std::fs;
use tempfile::tempdir;

fn memory_roster(users: Vec<User>) -> (Roster<InMemoryStore>, InMemoryStore) {
    let store = InMemoryStore::with_users(users);
    let handle = store.clone();
    let roster = Roster::open(store).unwrap();
    (roster, handle)
}

#[test]
fn open_fails_when_the_data_file_is_missing() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("user_data.json"));

    let err = Roster::open(store).unwrap_err();
    assert!(matches!(err, RosterError::Store(StoreError::Io(_))));
}

#[test]
fn add_assigns_fresh_ids_and_persists_exact_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("user_data.json");
    JsonFileStore::new(path.clone()).save(&[]).unwrap();

    let mut roster = Roster::open(JsonFileStore::new(path.clone())).unwrap();
    let first = roster.add("Alice", "30").unwrap();
    let second = roster.add("Zoe", "20").unwrap();
    assert_ne!(first, second);

    let reloaded = JsonFileStore::new(path).load().unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded[0].id, first);
    assert_eq!(reloaded[0].name, "Alice");
    assert_eq!(reloaded[0].age, 30);
    assert_eq!(reloaded[1].id, second);
    assert_eq!(reloaded[1].name, "Zoe");
    assert_eq!(reloaded[1].age, 20);
}

#[test]
fn add_rejects_out_of_range_age_and_leaves_collection_unchanged() {
    let (mut roster, handle) = memory_roster(Vec::new());

    let err = roster.add("Bob", "200").unwrap_err();
    assert!(matches!(
        err,
        RosterError::Validation(ValidationError::OutOfRange)
    ));
    assert!(roster.is_empty());
    assert!(handle.snapshot().is_empty());
}

#[test]
fn add_rejects_non_alphabetic_names() {
    let (mut roster, _handle) = memory_roster(Vec::new());

    let err = roster.add("Bob Smith", "30").unwrap_err();
    assert!(matches!(
        err,
        RosterError::Validation(ValidationError::InvalidChars)
    ));
    assert!(roster.is_empty());
}

#[test]
fn list_sorts_the_shared_collection_ascending_by_name() {
    let (mut roster, _handle) =
        memory_roster(vec![User::new("Zoe", 20), User::new("Alice", 30)]);

    let listed: Vec<String> = roster.list().iter().map(|user| user.name.clone()).collect();
    assert_eq!(listed, ["Alice", "Zoe"]);

    // The sort is applied in place; later operations observe the new order.
    let order: Vec<String> = roster.users().iter().map(|user| user.name.clone()).collect();
    assert_eq!(order, ["Alice", "Zoe"]);
}

#[test]
fn list_is_idempotent_and_case_sensitive() {
    let (mut roster, _handle) =
        memory_roster(vec![User::new("alice", 30), User::new("Zoe", 20)]);

    let first: Vec<String> = roster.list().iter().map(|user| user.name.clone()).collect();
    let second: Vec<String> = roster.list().iter().map(|user| user.name.clone()).collect();

    assert_eq!(first, second);
    // Byte order: uppercase sorts before lowercase.
    assert_eq!(first, ["Zoe", "alice"]);
}

#[test]
fn list_does_not_persist_the_new_order() {
    let (mut roster, handle) =
        memory_roster(vec![User::new("Zoe", 20), User::new("Alice", 30)]);

    roster.list();

    let saved: Vec<String> = handle
        .snapshot()
        .iter()
        .map(|user| user.name.clone())
        .collect();
    assert_eq!(saved, ["Zoe", "Alice"]);
}

#[test]
fn edit_preserves_id_and_position() {
    let users = vec![
        User::new("Alice", 30),
        User::new("Bob", 41),
        User::new("Zoe", 20),
    ];
    let bob_id = users[1].id;
    let (mut roster, handle) = memory_roster(users);

    let edited = roster.edit("Bob", "Robert", "42").unwrap();
    assert_eq!(edited, bob_id);

    let current = roster.users();
    assert_eq!(current[1].id, bob_id);
    assert_eq!(current[1].name, "Robert");
    assert_eq!(current[1].age, 42);
    assert_eq!(handle.snapshot()[1].name, "Robert");
}

#[test]
fn edit_touches_only_the_first_duplicate_name() {
    let (mut roster, _handle) =
        memory_roster(vec![User::new("Alice", 30), User::new("Alice", 31)]);

    roster.edit("Alice", "Alicia", "32").unwrap();

    let current = roster.users();
    assert_eq!(current[0].name, "Alicia");
    assert_eq!(current[0].age, 32);
    assert_eq!(current[1].name, "Alice");
    assert_eq!(current[1].age, 31);
}

#[test]
fn edit_unknown_name_is_not_found() {
    let (mut roster, _handle) = memory_roster(vec![User::new("Alice", 30)]);

    let err = roster.edit("Zoe", "Zoey", "21").unwrap_err();
    assert!(matches!(err, RosterError::NotFound(name) if name == "Zoe"));
}

#[test]
fn edit_validates_before_mutating() {
    let (mut roster, _handle) = memory_roster(vec![User::new("Alice", 30)]);

    let err = roster.edit("Alice", "Alice", "151").unwrap_err();
    assert!(matches!(
        err,
        RosterError::Validation(ValidationError::OutOfRange)
    ));
    assert_eq!(roster.users()[0].age, 30);
}

#[test]
fn remove_returns_the_removed_record() {
    let users = vec![User::new("Alice", 30), User::new("Zoe", 20)];
    let alice_id = users[0].id;
    let (mut roster, handle) = memory_roster(users);

    let removed = roster.remove("Alice").unwrap();
    assert_eq!(removed.id, alice_id);
    assert_eq!(removed.name, "Alice");
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.users()[0].name, "Zoe");
    assert_eq!(handle.snapshot().len(), 1);
}

#[test]
fn remove_touches_only_the_first_duplicate_name() {
    let users = vec![User::new("Alice", 30), User::new("Alice", 31)];
    let second_id = users[1].id;
    let (mut roster, _handle) = memory_roster(users);

    roster.remove("Alice").unwrap();

    assert_eq!(roster.len(), 1);
    assert_eq!(roster.users()[0].id, second_id);
}

#[test]
fn remove_unknown_name_is_not_found() {
    let (mut roster, _handle) = memory_roster(vec![User::new("Alice", 30)]);

    let err = roster.remove("Zoe").unwrap_err();
    assert!(matches!(err, RosterError::NotFound(name) if name == "Zoe"));
    assert_eq!(roster.len(), 1);
}

#[test]
fn removing_the_only_record_leaves_an_empty_array_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("user_data.json");
    JsonFileStore::new(path.clone())
        .save(&[User::new("Alice", 30)])
        .unwrap();

    let mut roster = Roster::open(JsonFileStore::new(path.clone())).unwrap();
    roster.remove("Alice").unwrap();

    assert!(roster.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn failed_save_keeps_the_in_memory_mutation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("user_data.json");
    JsonFileStore::new(path.clone()).save(&[]).unwrap();

    let mut roster = Roster::open(JsonFileStore::new(path.clone())).unwrap();
    roster.add("Alice", "30").unwrap();

    // Make the next save fail: replace the file with a directory.
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let err = roster.add("Zoe", "20").unwrap_err();
    assert!(matches!(err, RosterError::Store(StoreError::Io(_))));
    // No rollback: memory runs ahead of disk.
    assert_eq!(roster.len(), 2);
}
