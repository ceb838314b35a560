mod common;

use common::CountingStore;
use pretty_assertions::assert_eq;
use rolodex_cache::{
    EntryStatus, FetchOrchestrator, MutationCoordinator, MutationError, OptionLists, QueryKey,
};
use rolodex_store::{MemoryStore, RecordStore, StoreError};
use rolodex_types::CustomerDraft;
use rolodex_validate::{CustomerValidator, Field};
use std::sync::Arc;

async fn make_coordinator() -> (
    Arc<CountingStore>,
    Arc<FetchOrchestrator>,
    MutationCoordinator,
) {
    let store = Arc::new(CountingStore::new(MemoryStore::new()));
    let orchestrator = Arc::new(FetchOrchestrator::new(
        store.clone() as Arc<dyn RecordStore>
    ));
    let options = OptionLists::load(store.as_ref()).await.unwrap();
    let validator = CustomerValidator::new(options.into_validator_config());
    let coordinator = MutationCoordinator::new(
        store.clone() as Arc<dyn RecordStore>,
        orchestrator.clone(),
        validator,
    );
    (store, orchestrator, coordinator)
}

fn valid_draft(first: &str, email: &str) -> CustomerDraft {
    CustomerDraft {
        first_name: first.to_string(),
        last_name: "Tester".to_string(),
        title: "Software Engineer".to_string(),
        email: email.to_string(),
        country: "Thailand".to_string(),
    }
}

// ── Option lists ─────────────────────────────────────────────────

#[tokio::test]
async fn option_lists_load_from_the_store() {
    let store = MemoryStore::with_options(
        vec!["Director".to_string()],
        vec!["Norway".to_string()],
    );
    let options = OptionLists::load(&store).await.unwrap();

    assert_eq!(options.titles, vec!["Director"]);
    assert_eq!(options.countries, vec!["Norway"]);
}

// ── Create ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_persists_and_refreshes_the_active_key() {
    let (_, orchestrator, coordinator) = make_coordinator().await;
    let key = QueryKey::listing(1);

    let before = orchestrator.fetch(&key).await;
    assert!(before.records.is_empty());

    let created = coordinator
        .create(&valid_draft("Ada", "ada@x.com"))
        .await
        .unwrap();

    // The entry was Ready before the mutation; one refetch cycle later it
    // reflects the new record without another explicit fetch.
    let after = orchestrator.get(&key).unwrap();
    assert_eq!(after.status, EntryStatus::Ready);
    assert!(!after.stale);
    assert_eq!(after.records, vec![created]);
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_store() {
    let (store, orchestrator, coordinator) = make_coordinator().await;
    let key = QueryKey::listing(1);
    orchestrator.fetch(&key).await;
    let calls_before = store.list_count();

    let mut draft = valid_draft("ada", "ada@x.com"); // lowercase first name
    draft.email = "broken".to_string();

    let err = coordinator.create(&draft).await.unwrap_err();
    let MutationError::Validation(report) = err else {
        panic!("expected a validation rejection");
    };
    assert!(!report.field(Field::FirstName).is_valid());
    assert!(!report.field(Field::Email).is_valid());

    // No store traffic, no cache churn.
    assert_eq!(store.inner_len().await, 0);
    assert_eq!(store.list_count(), calls_before);
    assert!(!orchestrator.get(&key).unwrap().stale);
}

#[tokio::test]
async fn conflicting_create_surfaces_without_cache_mutation() {
    let (store, orchestrator, coordinator) = make_coordinator().await;
    let key = QueryKey::listing(1);

    coordinator
        .create(&valid_draft("Ada", "ada@x.com"))
        .await
        .unwrap();
    orchestrator.fetch(&key).await;
    let calls_before = store.list_count();

    let err = coordinator
        .create(&valid_draft("Ada", "other@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MutationError::Store(StoreError::Conflict(_))
    ));

    // Failure does not invalidate or refetch.
    let entry = orchestrator.get(&key).unwrap();
    assert!(!entry.stale);
    assert_eq!(entry.records.len(), 1);
    assert_eq!(store.list_count(), calls_before);
}

// ── Update ───────────────────────────────────────────────────────

#[tokio::test]
async fn update_refreshes_the_cache_with_new_fields() {
    let (_, orchestrator, coordinator) = make_coordinator().await;
    let key = QueryKey::listing(1);

    let created = coordinator
        .create(&valid_draft("Ada", "ada@x.com"))
        .await
        .unwrap();
    orchestrator.fetch(&key).await;

    let mut draft = created.as_draft();
    draft.email = "countess@x.com".to_string();
    coordinator.update(created.id, &draft).await.unwrap();

    let entry = orchestrator.get(&key).unwrap();
    assert_eq!(entry.records[0].email, "countess@x.com");
    assert_eq!(entry.records[0].id, created.id);
}

#[tokio::test]
async fn resubmitting_a_record_unchanged_is_accepted() {
    let (_, _, coordinator) = make_coordinator().await;

    let created = coordinator
        .create(&valid_draft("Ada", "ada@x.com"))
        .await
        .unwrap();
    let updated = coordinator
        .update(created.id, &created.as_draft())
        .await
        .unwrap();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn update_validates_before_any_store_traffic() {
    let (store, _, coordinator) = make_coordinator().await;

    let created = coordinator
        .create(&valid_draft("Ada", "ada@x.com"))
        .await
        .unwrap();

    let mut draft = created.as_draft();
    draft.first_name = " Ada".to_string();
    let err = coordinator.update(created.id, &draft).await.unwrap_err();
    assert!(matches!(err, MutationError::Validation(_)));

    // The stored record is untouched.
    assert_eq!(store.inner_len().await, 1);
}

// ── Delete ───────────────────────────────────────────────────────

#[tokio::test]
async fn delete_refreshes_the_cache() {
    let (_, orchestrator, coordinator) = make_coordinator().await;
    let key = QueryKey::listing(1);

    let created = coordinator
        .create(&valid_draft("Ada", "ada@x.com"))
        .await
        .unwrap();
    orchestrator.fetch(&key).await;

    coordinator.delete(created.id).await.unwrap();

    let entry = orchestrator.get(&key).unwrap();
    assert!(entry.records.is_empty());
    assert_eq!(entry.total_pages, 0);
}

#[tokio::test]
async fn deleting_a_missing_record_is_a_store_error() {
    let (_, _, coordinator) = make_coordinator().await;
    let err = coordinator
        .delete(rolodex_types::CustomerId::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MutationError::Store(StoreError::NotFound(_))
    ));
}
