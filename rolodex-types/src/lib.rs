//! Core type definitions for Rolodex.
//!
//! This crate defines the fundamental types shared by every other layer:
//! - Customer record identifiers (UUID v7)
//! - The customer record model and its draft (not-yet-created) form
//! - The paginated wire envelope returned by record listings
//!
//! Everything here is plain data. Validation, storage, and caching live in
//! their own crates.

mod customer;
mod ids;
mod page;

pub use customer::{Customer, CustomerDraft};
pub use ids::CustomerId;
pub use page::CustomerPage;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
