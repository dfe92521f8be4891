//! Tests for the session-keyed history stores.

use fordle::{Game, GuessHistoryStore, InMemoryHistoryStore, JsonFileHistoryStore, Mode, Target};

fn snapshot_after_one_guess() -> fordle::GameSnapshot {
    let target = Target::new("MMM", "Industrials", "Saint Paul, Minnesota");
    let mut game = Game::new(target, Mode::Advanced);
    game.submit("ABC").unwrap();
    game.snapshot()
}

#[test]
fn test_in_memory_round_trip() {
    let store = InMemoryHistoryStore::new();
    let snapshot = snapshot_after_one_guess();

    assert!(store.load("s1").unwrap().is_none());
    store.save("s1", &snapshot).unwrap();
    assert_eq!(store.load("s1").unwrap(), Some(snapshot));

    store.clear("s1").unwrap();
    assert!(store.load("s1").unwrap().is_none());
}

#[test]
fn test_in_memory_save_overwrites() {
    let store = InMemoryHistoryStore::new();
    let first = snapshot_after_one_guess();
    store.save("s1", &first).unwrap();

    let target = Target::new("KO", "Consumer Staples", "Atlanta, Georgia");
    let second = Game::new(target, Mode::Beginner).snapshot();
    store.save("s1", &second).unwrap();

    assert_eq!(store.load("s1").unwrap(), Some(second));
}

#[test]
fn test_file_store_survives_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = snapshot_after_one_guess();

    {
        let store = JsonFileHistoryStore::new(dir.path()).unwrap();
        store.save("player-1", &snapshot).unwrap();
    }

    // A freshly built store over the same directory sees the snapshot.
    let store = JsonFileHistoryStore::new(dir.path()).unwrap();
    assert_eq!(store.load("player-1").unwrap(), Some(snapshot));
}

#[test]
fn test_file_store_missing_session_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileHistoryStore::new(dir.path()).unwrap();
    assert!(store.load("nobody").unwrap().is_none());
}

#[test]
fn test_file_store_clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileHistoryStore::new(dir.path()).unwrap();
    store.save("s1", &snapshot_after_one_guess()).unwrap();

    store.clear("s1").unwrap();
    store.clear("s1").unwrap();
    assert!(store.load("s1").unwrap().is_none());
}

#[test]
fn test_file_store_sanitizes_session_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileHistoryStore::new(dir.path()).unwrap();
    let snapshot = snapshot_after_one_guess();

    store.save("../escape/../../attempt", &snapshot).unwrap();
    assert_eq!(
        store.load("../escape/../../attempt").unwrap(),
        Some(snapshot)
    );
    // Nothing was written outside the store directory.
    assert!(dir.path().join("..").join("escape").metadata().is_err());
}

#[test]
fn test_restored_game_continues_where_it_left_off() {
    let snapshot = snapshot_after_one_guess();
    let mut game = Game::from_snapshot(snapshot);

    assert_eq!(game.attempts(), 1);
    assert_eq!(game.history().len(), 1);

    let outcome = game.submit("MMM").unwrap();
    assert_eq!(*outcome.transition(), fordle::Transition::Win);
}
