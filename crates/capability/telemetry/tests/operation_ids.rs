use civic_telemetry::{metrics, new_operation_id, record_assignment, record_hold};

#[test]
fn operation_ids_non_empty_and_unique() {
    let first = new_operation_id();
    let second = new_operation_id();
    assert!(!first.is_empty());
    assert_ne!(first, second);
}

#[test]
fn counters_accumulate_into_snapshot() {
    let before = metrics().snapshot();
    record_assignment();
    record_hold();
    let after = metrics().snapshot();
    assert_eq!(after.assignments, before.assignments + 1);
    assert_eq!(after.holds, before.holds + 1);
}
