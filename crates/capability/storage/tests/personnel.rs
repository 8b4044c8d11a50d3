use civic_storage::{InMemoryKvStore, PersonnelStore};
use domain::{
    Department, PersonnelDraft, PersonnelStatus, PersonnelUpdate, personnel::TIER_SPECIALIST,
};
use std::sync::Arc;

fn store() -> PersonnelStore {
    PersonnelStore::new(Arc::new(InMemoryKvStore::new()))
}

fn draft(name: &str, department: Department) -> PersonnelDraft {
    PersonnelDraft {
        name: name.to_string(),
        role: "Field Crew".to_string(),
        tier: 1,
        status: None,
        department,
    }
}

#[tokio::test]
async fn add_personnel_derives_id_and_defaults_to_available() {
    let store = store();
    let first = store
        .add_personnel(draft("Ana Lucia", Department::Sanitation))
        .await
        .expect("add");
    let second = store
        .add_personnel(draft("Ben Linus", Department::Power))
        .await
        .expect("add");

    assert_eq!(first.id, "P-1000");
    assert_eq!(second.id, "P-1001");
    assert_eq!(first.status, PersonnelStatus::Available);

    // 登记顺序即集合顺序（追加到尾部）。
    let people = store.list_personnel().await.expect("list");
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].id, first.id);
    assert_eq!(people[1].id, second.id);
}

#[tokio::test]
async fn update_personnel_merges_only_given_fields() {
    let store = store();
    let person = store
        .add_personnel(draft("Ana Lucia", Department::Sanitation))
        .await
        .expect("add");

    let updated = store
        .update_personnel(
            &person.id,
            PersonnelUpdate {
                status: Some(PersonnelStatus::Busy),
                tier: Some(TIER_SPECIALIST),
                ..PersonnelUpdate::default()
            },
        )
        .await
        .expect("update")
        .expect("found");

    assert_eq!(updated.status, PersonnelStatus::Busy);
    assert_eq!(updated.tier, TIER_SPECIALIST);
    assert_eq!(updated.name, person.name);
    assert_eq!(updated.department, person.department);
}

#[tokio::test]
async fn update_unknown_personnel_is_soft() {
    let store = store();
    store
        .add_personnel(draft("Ana Lucia", Department::Sanitation))
        .await
        .expect("add");
    let before = store.list_personnel().await.expect("list");

    let missing = store
        .update_personnel("P-9999", PersonnelUpdate::status_only(PersonnelStatus::Busy))
        .await
        .expect("update");
    assert!(missing.is_none());
    assert_eq!(store.list_personnel().await.expect("list"), before);
}

#[tokio::test]
async fn find_personnel_unknown_id_returns_none() {
    let store = store();
    assert!(store.find_personnel("P-42").await.expect("find").is_none());
}
