//! Record store error taxonomy.

use rolodex_types::CustomerId;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur against the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Duplicate guard rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The target record no longer exists.
    #[error("customer not found: {0}")]
    NotFound(CustomerId),

    /// The store rejected the payload as invalid.
    #[error("validation rejected: {0}")]
    Validation(String),

    /// Store unreachable, or a response outside the taxonomy.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl StoreError {
    /// True when the failure is a duplicate-guard rejection.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// True when the failure targets a record that no longer exists.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
