mod common;

use bson::{doc, Bson};
use common::MemoryStore;
use opo_maintenance::modules::backfill::controller::{backfill, BackfillError};
use tokio_test::{assert_err, assert_ok};

fn users_without_enabled() -> MemoryStore {
    MemoryStore::with(vec![
        doc! { "_id": "u1", "name": "Ana", "area": 1 },
        doc! { "_id": "u2", "name": "Luis", "area": 2 },
        doc! { "_id": "u3", "name": "Marta", "area": 1 },
    ])
}

#[tokio::test]
async fn test_backfill_sets_default_on_every_document() {
    let store = users_without_enabled();

    let report = assert_ok!(backfill(&store, "enabled", Bson::Boolean(false)).await);

    assert_eq!(report.missing_before, 3);
    assert_eq!(report.matched_count, 3);
    assert_eq!(report.modified_count, 3);
    assert_eq!(report.total_after, 3);
    assert_eq!(report.with_default_after, 3);
    assert_eq!(report.without_default_after, 0);
    assert!(store
        .documents()
        .iter()
        .all(|d| d.get("enabled") == Some(&Bson::Boolean(false))));
}

#[tokio::test]
async fn test_backfill_leaves_existing_values_alone() {
    let store = MemoryStore::with(vec![
        doc! { "_id": "t1", "title": "Constitución", "premium": true },
        doc! { "_id": "t2", "title": "Penal", "premium": true },
        doc! { "_id": "t3", "title": "Tráfico" },
    ]);

    let report = assert_ok!(backfill(&store, "premium", Bson::Boolean(false)).await);

    assert_eq!(report.missing_before, 1);
    assert_eq!(report.modified_count, 1);
    assert_eq!(report.with_default_after, 1);
    assert_eq!(report.without_default_after, 2);

    let documents = store.documents();
    assert!(documents[0].get_bool("premium").unwrap());
    assert!(documents[1].get_bool("premium").unwrap());
    assert!(!documents[2].get_bool("premium").unwrap());
}

#[tokio::test]
async fn test_backfill_keeps_values_of_other_types() {
    let store = MemoryStore::with(vec![
        doc! { "_id": "a", "enabled": "yes" },
        doc! { "_id": "b", "enabled": Bson::Null },
        doc! { "_id": "c" },
    ]);

    assert_ok!(backfill(&store, "enabled", Bson::Boolean(false)).await);

    let documents = store.documents();
    assert_eq!(documents[0].get_str("enabled").unwrap(), "yes");
    assert_eq!(documents[1].get("enabled"), Some(&Bson::Null));
    assert!(!documents[2].get_bool("enabled").unwrap());
}

#[tokio::test]
async fn test_backfill_twice_is_a_noop() {
    let store = users_without_enabled();

    assert_ok!(backfill(&store, "enabled", Bson::Boolean(false)).await);
    let second = assert_ok!(backfill(&store, "enabled", Bson::Boolean(false)).await);

    assert!(second.is_noop());
    assert_eq!(second.matched_count, 0);
    assert_eq!(second.modified_count, 0);
    assert_eq!(second.with_default_after, 3);
    assert_eq!(store.writes(), 1);
}

#[tokio::test]
async fn test_backfill_on_empty_collection_issues_no_write() {
    let store = MemoryStore::default();

    let report = assert_ok!(backfill(&store, "premium", Bson::Boolean(false)).await);

    assert!(report.is_noop());
    assert_eq!(report.missing_before, 0);
    assert_eq!(report.total_after, 0);
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_backfill_unreachable_store() {
    let store = users_without_enabled().offline();

    let err = assert_err!(backfill(&store, "enabled", Bson::Boolean(false)).await);

    assert!(matches!(err, BackfillError::ConnectivityError(_)));
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_backfill_write_failure_can_be_rerun() {
    let failing = users_without_enabled().failing_writes();

    let err = assert_err!(backfill(&failing, "enabled", Bson::Boolean(false)).await);
    assert!(matches!(err, BackfillError::WriteError(_)));
    assert!(failing.documents().iter().all(|d| !d.contains_key("enabled")));

    let healthy = MemoryStore::with(failing.documents());
    let report = assert_ok!(backfill(&healthy, "enabled", Bson::Boolean(false)).await);
    assert_eq!(report.modified_count, 3);
}

#[tokio::test]
async fn test_backfill_rejects_invalid_field_before_touching_store() {
    let store = MemoryStore::default().offline();

    let err = assert_err!(backfill(&store, "$set", Bson::Boolean(false)).await);

    assert!(matches!(err, BackfillError::InvalidField(..)));
}
