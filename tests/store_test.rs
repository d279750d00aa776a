use toptracks::{
    management::{MemorySnapshotStore, SnapshotStore, SqliteSnapshotStore},
    types::Track,
};

fn create_test_track(name: &str, artwork: Option<&str>) -> Track {
    Track {
        name: name.to_string(),
        artist: "Artist A, Artist B".to_string(),
        album: format!("{name} Album"),
        spotify_url: format!("https://open.spotify.com/track/{name}"),
        artwork: artwork.map(|a| a.to_string()),
    }
}

async fn sqlite_store() -> SqliteSnapshotStore {
    SqliteSnapshotStore::connect("sqlite::memory:").await.unwrap()
}

async fn check_upsert_replaces_snapshot(store: &dyn SnapshotStore) {
    let first = vec![
        create_test_track("One", Some("https://img/one")),
        create_test_track("Two", None),
    ];
    let second = vec![create_test_track("Three", None)];

    let saved = store.upsert_snapshot("user-1", first.clone()).await.unwrap();
    assert_eq!(saved.tracks, first);

    let replaced = store.upsert_snapshot("user-1", second.clone()).await.unwrap();
    assert!(replaced.timestamp >= saved.timestamp);

    let stored = store.get_snapshot("user-1").await.unwrap().unwrap();
    assert_eq!(stored.user_id, "user-1");
    assert_eq!(stored.tracks, second);

    assert_eq!(store.user_ids().await.unwrap(), vec!["user-1".to_string()]);
}

async fn check_snapshots_are_keyed_by_user(store: &dyn SnapshotStore) {
    store
        .upsert_snapshot("bob", vec![create_test_track("B", None)])
        .await
        .unwrap();
    store
        .upsert_snapshot("alice", vec![create_test_track("A", None)])
        .await
        .unwrap();

    let alice = store.get_snapshot("alice").await.unwrap().unwrap();
    assert_eq!(alice.tracks[0].name, "A");
    assert!(store.get_snapshot("carol").await.unwrap().is_none());
    assert_eq!(
        store.user_ids().await.unwrap(),
        vec!["alice".to_string(), "bob".to_string()]
    );
}

#[tokio::test]
async fn test_sqlite_upsert_replaces_snapshot() {
    let store = sqlite_store().await;
    check_upsert_replaces_snapshot(&store).await;
}

#[tokio::test]
async fn test_sqlite_snapshots_are_keyed_by_user() {
    let store = sqlite_store().await;
    check_snapshots_are_keyed_by_user(&store).await;
}

#[tokio::test]
async fn test_memory_upsert_replaces_snapshot() {
    let store = MemorySnapshotStore::new();
    check_upsert_replaces_snapshot(&store).await;
}

#[tokio::test]
async fn test_memory_snapshots_are_keyed_by_user() {
    let store = MemorySnapshotStore::new();
    check_snapshots_are_keyed_by_user(&store).await;
}

#[tokio::test]
async fn test_sqlite_get_missing_snapshot() {
    let store = sqlite_store().await;

    assert!(store.get_snapshot("nobody").await.unwrap().is_none());
    assert!(store.user_ids().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sqlite_keeps_empty_snapshot() {
    let store = sqlite_store().await;

    store.upsert_snapshot("user-1", Vec::new()).await.unwrap();

    let stored = store.get_snapshot("user-1").await.unwrap().unwrap();
    assert!(stored.tracks.is_empty());
}

#[tokio::test]
async fn test_sqlite_creates_missing_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("toptracks.db");
    let url = format!("sqlite://{}", path.display());

    let store = SqliteSnapshotStore::connect(&url).await.unwrap();
    store
        .upsert_snapshot("user-1", vec![create_test_track("One", None)])
        .await
        .unwrap();

    assert!(path.is_file());
    let stored = store.get_snapshot("user-1").await.unwrap().unwrap();
    assert_eq!(stored.tracks[0].name, "One");
}
