use std::path::PathBuf;

use musetunes::{
    management::{FileStorage, MemoryStorage},
    session::SessionStorage,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("musetunes-test-{}-{}", std::process::id(), name))
        .join("storage.json")
}

#[tokio::test]
async fn test_file_storage_roundtrip() {
    let storage = FileStorage::at(temp_path("roundtrip"));

    assert_eq!(storage.get("pendingSearchTerm").await.unwrap(), None);

    storage.set("pendingSearchTerm", "daft punk").await.unwrap();
    storage.set("other", "value").await.unwrap();
    storage.set("pendingSearchTerm", "air").await.unwrap();
    assert_eq!(
        storage.get("pendingSearchTerm").await.unwrap().as_deref(),
        Some("air")
    );

    storage.remove("pendingSearchTerm").await.unwrap();
    assert_eq!(storage.get("pendingSearchTerm").await.unwrap(), None);
    assert_eq!(storage.get("other").await.unwrap().as_deref(), Some("value"));

    storage.clear().await.unwrap();
    assert!(!storage.path().is_file());
}

#[tokio::test]
async fn test_file_storage_survives_new_instance() {
    let path = temp_path("reopen");

    FileStorage::at(path.clone())
        .set("pendingSearchTerm", "daft punk")
        .await
        .unwrap();

    let reopened = FileStorage::at(path);
    assert_eq!(
        reopened.get("pendingSearchTerm").await.unwrap().as_deref(),
        Some("daft punk")
    );
    reopened.clear().await.unwrap();
}

#[tokio::test]
async fn test_memory_storage() {
    let storage = MemoryStorage::new();

    storage.set("pendingSearchTerm", "daft punk").await.unwrap();
    assert_eq!(
        storage.get("pendingSearchTerm").await.unwrap().as_deref(),
        Some("daft punk")
    );

    storage.remove("pendingSearchTerm").await.unwrap();
    storage.remove("pendingSearchTerm").await.unwrap();
    assert_eq!(storage.get("pendingSearchTerm").await.unwrap(), None);
}
