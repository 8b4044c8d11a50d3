use civic_storage::{InMemoryKvStore, IssueStore};
use domain::{Actor, Department, IssueDraft, IssueStatus, IssueUpdate, Priority};
use std::sync::Arc;

fn store() -> IssueStore {
    IssueStore::new(Arc::new(InMemoryKvStore::new()))
}

fn draft(issue_type: &str) -> IssueDraft {
    IssueDraft {
        title: format!("{} reported", issue_type),
        issue_type: issue_type.to_string(),
        description: "test".to_string(),
        location: "Sector 9".to_string(),
        ..IssueDraft::default()
    }
}

#[tokio::test]
async fn create_issue_applies_defaults() {
    let store = store();
    let issue = store.create_issue(draft("Pothole Repair")).await.expect("create");

    assert_eq!(issue.id, "ISS-1001");
    assert_eq!(issue.status, IssueStatus::Reported);
    assert_eq!(issue.priority, Priority::Medium);
    assert_eq!(issue.department, Department::PublicWorks);
    assert!(issue.attachments.is_empty());
    assert_eq!(issue.history.len(), 1);
    assert_eq!(issue.history[0].action, "Reported");
    assert_eq!(issue.history[0].by, "Citizen");
}

#[tokio::test]
async fn department_derivation_covers_keyword_table() {
    let store = store();
    let light = store
        .create_issue(draft("Street Light Failure"))
        .await
        .expect("create");
    assert_eq!(light.department, Department::Power);

    let garbage = store.create_issue(draft("Garbage Dump")).await.expect("create");
    assert_eq!(garbage.department, Department::Sanitation);

    let other = store.create_issue(draft("Graffiti")).await.expect("create");
    assert_eq!(other.department, Department::Admin);
}

#[tokio::test]
async fn explicit_department_wins_over_derivation() {
    let store = store();
    let issue = store
        .create_issue(IssueDraft {
            department: Some(Department::Health),
            ..draft("Pothole")
        })
        .await
        .expect("create");
    assert_eq!(issue.department, Department::Health);
}

#[tokio::test]
async fn newest_issue_is_listed_first() {
    let store = store();
    store.create_issue(draft("Pothole")).await.expect("first");
    let second = store.create_issue(draft("Water Leakage")).await.expect("second");

    let issues = store.list_issues().await.expect("list");
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].id, second.id);
    assert_eq!(second.id, "ISS-1002");
}

#[tokio::test]
async fn status_change_appends_exactly_one_history_entry() {
    let store = store();
    let issue = store.create_issue(draft("Pothole")).await.expect("create");

    let updated = store
        .update_issue(
            &issue.id,
            IssueUpdate::status_only(IssueStatus::Assigned),
            &Actor::supervisor(),
        )
        .await
        .expect("update")
        .expect("found");
    assert_eq!(updated.status, IssueStatus::Assigned);
    assert_eq!(updated.history.len(), 2);
    assert_eq!(updated.history[1].action, "Status changed to assigned");
    assert_eq!(updated.history[1].by, "Supervisor");

    // 同状态再写一遍：不追加轨迹。
    let unchanged = store
        .update_issue(
            &issue.id,
            IssueUpdate::status_only(IssueStatus::Assigned),
            &Actor::supervisor(),
        )
        .await
        .expect("update")
        .expect("found");
    assert_eq!(unchanged.history.len(), 2);
}

#[tokio::test]
async fn non_status_update_leaves_history_alone() {
    let store = store();
    let issue = store.create_issue(draft("Pothole")).await.expect("create");

    let updated = store
        .update_issue(
            &issue.id,
            IssueUpdate {
                priority: Some(Priority::Critical),
                ..IssueUpdate::default()
            },
            &Actor::staff_officer(),
        )
        .await
        .expect("update")
        .expect("found");
    assert_eq!(updated.priority, Priority::Critical);
    assert_eq!(updated.history.len(), 1);
    assert!(updated.updated_at >= issue.updated_at);
}

#[tokio::test]
async fn update_unknown_id_is_soft_and_leaves_collection_untouched() {
    let store = store();
    store.create_issue(draft("Pothole")).await.expect("create");
    let before = store.list_issues().await.expect("list");

    let missing = store
        .update_issue(
            "ISS-9999",
            IssueUpdate::status_only(IssueStatus::Closed),
            &Actor::system(),
        )
        .await
        .expect("update");
    assert!(missing.is_none());

    let after = store.list_issues().await.expect("list");
    assert_eq!(before, after);
}

#[tokio::test]
async fn find_issue_unknown_id_returns_none() {
    let store = store();
    assert!(store.find_issue("ISS-1234").await.expect("find").is_none());
}
