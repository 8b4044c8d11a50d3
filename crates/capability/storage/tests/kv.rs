use civic_storage::{InMemoryKvStore, JsonFileKvStore, KeyValueStore};

#[tokio::test]
async fn in_memory_set_get_remove() {
    let kv = InMemoryKvStore::new();
    assert!(kv.get("cp_issues").await.expect("get").is_none());

    kv.set("cp_issues", "[]").await.expect("set");
    assert_eq!(kv.get("cp_issues").await.expect("get").as_deref(), Some("[]"));

    kv.remove("cp_issues").await.expect("remove");
    assert!(kv.get("cp_issues").await.expect("get").is_none());

    // 移除不存在的键是无害操作。
    kv.remove("cp_issues").await.expect("remove twice");
}

#[tokio::test]
async fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("civic.json");

    {
        let kv = JsonFileKvStore::new(&path);
        kv.set("cp_issues", "[]").await.expect("set");
        kv.set("cp_personnel", r#"[{"id":"P-001"}]"#).await.expect("set");
    }

    let reopened = JsonFileKvStore::new(&path);
    assert_eq!(
        reopened.get("cp_issues").await.expect("get").as_deref(),
        Some("[]")
    );
    assert_eq!(
        reopened.get("cp_personnel").await.expect("get").as_deref(),
        Some(r#"[{"id":"P-001"}]"#)
    );

    reopened.remove("cp_personnel").await.expect("remove");
    let reopened_again = JsonFileKvStore::new(&path);
    assert!(
        reopened_again
            .get("cp_personnel")
            .await
            .expect("get")
            .is_none()
    );
}

#[tokio::test]
async fn file_store_missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let kv = JsonFileKvStore::new(dir.path().join("nested").join("absent.json"));
    assert!(kv.get("cp_issues").await.expect("get").is_none());
}

#[tokio::test]
async fn file_store_corrupt_payload_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("civic.json");
    std::fs::write(&path, "not json at all").expect("write");

    let kv = JsonFileKvStore::new(&path);
    let err = kv.get("cp_issues").await.expect_err("corrupt file");
    assert!(err.to_string().contains("corrupt"));
}
