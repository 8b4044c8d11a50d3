use civic_storage::{CivicDatabase, InMemoryKvStore, KeyValueStore};
use domain::IssueStatus;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

fn database() -> (CivicDatabase, Arc<InMemoryKvStore>) {
    let kv = Arc::new(InMemoryKvStore::new());
    (CivicDatabase::new(kv.clone()), kv)
}

// 只带三条核心记录的遗留 blob：无坐标、无附件、无受理人。
const LEGACY_BLOB: &str = r#"[
  {
    "id": "ISS-1001",
    "title": "Deep Pothole on Main St",
    "type": "Pothole",
    "priority": "Critical",
    "status": "assigned",
    "department": "Public Works",
    "description": "A large pothole.",
    "location": "Main Market Road, Sector 4",
    "createdAt": "2024-01-01T00:00:00Z",
    "updatedAt": "2024-01-02T00:00:00Z",
    "history": []
  }
]"#;

#[tokio::test]
async fn initialize_seeds_empty_storage_once() {
    let (db, _kv) = database();
    db.initialize(true).await.expect("initialize");

    let issues = db.issues().list_issues().await.expect("issues");
    let people = db.personnel().list_personnel().await.expect("personnel");
    assert_eq!(issues.len(), 3);
    assert_eq!(people.len(), 13);

    // 再初始化不重复播种。
    db.initialize(true).await.expect("initialize again");
    assert_eq!(db.issues().list_issues().await.expect("issues").len(), 3);
}

#[tokio::test]
async fn initialize_without_seed_flag_leaves_storage_empty() {
    let (db, kv) = database();
    db.initialize(false).await.expect("initialize");

    assert!(kv.get("cp_issues").await.expect("get").is_none());
    assert!(db.issues().list_issues().await.expect("issues").is_empty());
    assert!(
        db.personnel()
            .list_personnel()
            .await
            .expect("personnel")
            .is_empty()
    );
}

#[tokio::test]
async fn initialize_migrates_legacy_issues_missing_coordinates() {
    let (db, kv) = database();
    kv.set("cp_issues", LEGACY_BLOB).await.expect("set");

    let mut rng = StdRng::seed_from_u64(42);
    db.initialize_with_rng(true, &mut rng)
        .await
        .expect("initialize");

    let issues = db.issues().list_issues().await.expect("issues");
    assert_eq!(issues.len(), 1);
    let issue = &issues[0];

    let coords = issue.coordinates.expect("migrated coordinates");
    assert!((coords.lat - 40.7128).abs() < 0.005);
    assert!((coords.lng - -74.0060).abs() < 0.005);

    // 迁移只补坐标，其他字段原样保留。
    assert_eq!(issue.id, "ISS-1001");
    assert_eq!(issue.status, IssueStatus::Assigned);
    assert!(issue.assigned_to.is_none());
    assert!(issue.history.is_empty());

    // 存在工单键时不播种（遗留数据也只有一条）。
    assert_eq!(issues.len(), 1);
}

#[tokio::test]
async fn reset_clears_issues_and_removes_other_keys() {
    let (db, kv) = database();
    db.initialize(true).await.expect("initialize");

    db.reset().await.expect("reset");

    assert_eq!(
        kv.get("cp_issues").await.expect("get").as_deref(),
        Some("[]")
    );
    assert!(kv.get("cp_personnel").await.expect("get").is_none());
    assert!(kv.get("cp_users").await.expect("get").is_none());
    assert!(kv.get("cp_stats").await.expect("get").is_none());
}

#[tokio::test]
async fn initialize_after_reset_does_not_reseed_issues() {
    let (db, _kv) = database();
    db.initialize(true).await.expect("initialize");
    db.reset().await.expect("reset");
    db.initialize(true).await.expect("initialize after reset");

    // 显式空数组视为已有数据：工单保持为空，人员重新播种。
    assert!(db.issues().list_issues().await.expect("issues").is_empty());
    assert_eq!(
        db.personnel()
            .list_personnel()
            .await
            .expect("personnel")
            .len(),
        13
    );
}
