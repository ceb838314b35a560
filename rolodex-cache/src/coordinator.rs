//! Mutation coordination: validate, persist, invalidate, refetch.

use crate::FetchOrchestrator;
use rolodex_store::{RecordStore, StoreError, StoreResult};
use rolodex_types::{Customer, CustomerDraft, CustomerId};
use rolodex_validate::{CustomerValidator, ValidationReport, ValidatorConfig};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced to the caller of a mutation.
#[derive(Debug, Error)]
pub enum MutationError {
    /// The submission failed field validation and was never sent to the
    /// store. The report carries per-field messages for inline display.
    #[error("validation rejected the submission")]
    Validation(ValidationReport),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Server-provided option lists, fetched once per form session and treated
/// as read-only reference data.
#[derive(Debug, Clone)]
pub struct OptionLists {
    pub titles: Vec<String>,
    pub countries: Vec<String>,
}

impl OptionLists {
    /// Loads both option lists from the store.
    pub async fn load(store: &dyn RecordStore) -> StoreResult<Self> {
        Ok(Self {
            titles: store.titles().await?,
            countries: store.countries().await?,
        })
    }

    /// The validator configuration built from these lists.
    #[must_use]
    pub fn into_validator_config(self) -> ValidatorConfig {
        ValidatorConfig {
            titles: self.titles,
            countries: self.countries,
        }
    }
}

/// Performs create/update/delete against the record store and keeps the
/// query cache consistent afterwards.
///
/// Validation runs once per submission, before any store traffic; an
/// unacceptable draft never reaches the store. On store failure the error
/// is surfaced unchanged and the cache is not touched — there is no
/// automatic retry, resubmission is the caller's decision.
pub struct MutationCoordinator {
    store: Arc<dyn RecordStore>,
    cache: Arc<FetchOrchestrator>,
    validator: CustomerValidator,
}

impl MutationCoordinator {
    #[must_use]
    pub fn new(
        store: Arc<dyn RecordStore>,
        cache: Arc<FetchOrchestrator>,
        validator: CustomerValidator,
    ) -> Self {
        Self {
            store,
            cache,
            validator,
        }
    }

    /// Validates and persists a new record.
    pub async fn create(&self, draft: &CustomerDraft) -> Result<Customer, MutationError> {
        self.check(draft)?;
        let created = self.store.create(draft).await?;
        debug!(id = %created.id, "customer created");
        self.refresh_after_write().await;
        Ok(created)
    }

    /// Validates and overwrites an existing record.
    pub async fn update(
        &self,
        id: CustomerId,
        draft: &CustomerDraft,
    ) -> Result<Customer, MutationError> {
        self.check(draft)?;
        let updated = self.store.update(id, draft).await?;
        debug!(%id, "customer updated");
        self.refresh_after_write().await;
        Ok(updated)
    }

    /// Removes a record. No field validation applies to a delete.
    pub async fn delete(&self, id: CustomerId) -> Result<(), MutationError> {
        self.store.delete(id).await?;
        debug!(%id, "customer deleted");
        self.refresh_after_write().await;
        Ok(())
    }

    fn check(&self, draft: &CustomerDraft) -> Result<(), MutationError> {
        let report = self.validator.validate(draft);
        if report.is_acceptable() {
            Ok(())
        } else {
            Err(MutationError::Validation(report))
        }
    }

    /// Invalidation is sequenced before the refetch dispatch so the next
    /// view read reflects the new store state.
    async fn refresh_after_write(&self) {
        self.cache.invalidate_all();
        self.cache.refresh_active().await;
    }
}
