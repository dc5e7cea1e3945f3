use stockmeta::application::ports::CredentialStore;
use stockmeta::domain::CredentialSet;
use stockmeta::infrastructure::persistence::{
    CredentialFileStore, MockCredentialStore, STORAGE_KEY,
};

fn store_in(dir: &tempfile::TempDir) -> CredentialFileStore {
    CredentialFileStore::new(dir.path().join("settings.json"))
}

#[tokio::test]
async fn given_missing_file_when_loading_then_returns_empty_set() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let loaded = store.load().await.unwrap();
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn given_saved_credentials_when_loading_then_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let credentials = CredentialSet::from_values(["key-one", "key-two"]);
    store.save(&credentials).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, credentials);
}

#[tokio::test]
async fn given_second_save_when_loading_then_previous_list_is_fully_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store
        .save(&CredentialSet::from_values(["old-a", "old-b", "old-c"]))
        .await
        .unwrap();
    store
        .save(&CredentialSet::from_values(["new-only"]))
        .await
        .unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.iter().next(), Some("new-only"));
}

#[tokio::test]
async fn given_foreign_keys_in_settings_file_when_saving_then_they_survive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        format!(r#"{{"other.setting": 42, "{STORAGE_KEY}": ["stale"]}}"#),
    )
    .unwrap();

    let store = CredentialFileStore::new(path.clone());
    store
        .save(&CredentialSet::from_values(["fresh"]))
        .await
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw["other.setting"], 42);
    assert_eq!(raw[STORAGE_KEY], serde_json::json!(["fresh"]));
}

#[tokio::test]
async fn given_non_array_under_key_when_loading_then_fails_with_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, format!(r#"{{"{STORAGE_KEY}": "not an array"}}"#)).unwrap();

    let err = CredentialFileStore::new(path).load().await.unwrap_err();
    assert!(err.to_string().contains("format"));
}

#[tokio::test]
async fn given_mock_store_when_saving_then_load_reflects_it() {
    let store = MockCredentialStore::new();
    let credentials = CredentialSet::from_values(["a"]);

    store.save(&credentials).await.unwrap();
    assert_eq!(store.load().await.unwrap(), credentials);
}
