//! Record store contract and bindings.
//!
//! The core consumes the customer record store only through the
//! [`RecordStore`] trait. Two bindings live here:
//! - [`MemoryStore`] — the reference implementation backing the HTTP
//!   server and the test suites;
//! - [`HttpStore`] — a reqwest client speaking the server's REST surface.
//!
//! The duplicate guard ([`guard`]) is a pure collision predicate shared by
//! the store and the server middleware.

pub mod guard;

mod error;
mod http;
mod memory;

pub use error::{StoreError, StoreResult};
pub use http::HttpStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use rolodex_types::{Customer, CustomerDraft, CustomerId, CustomerPage};

/// Abstract record store interface.
///
/// `list` pages through records matching a free-text search;
/// `total_pages == 0` in the returned page signals an empty result set.
/// Mutations may fail with [`StoreError::Conflict`] (duplicate guard),
/// [`StoreError::NotFound`] (stale target id), or
/// [`StoreError::Validation`] (server-side rejection).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Lists one page of records matching `search` (empty = all records).
    async fn list(&self, search: &str, page: u32) -> StoreResult<CustomerPage>;

    /// Persists a new record and returns it with its assigned id.
    async fn create(&self, draft: &CustomerDraft) -> StoreResult<Customer>;

    /// Overwrites an existing record's fields.
    async fn update(&self, id: CustomerId, draft: &CustomerDraft) -> StoreResult<Customer>;

    /// Removes a record.
    async fn delete(&self, id: CustomerId) -> StoreResult<()>;

    /// Server-provided title options (read-only reference data).
    async fn titles(&self) -> StoreResult<Vec<String>>;

    /// Server-provided country options (read-only reference data).
    async fn countries(&self) -> StoreResult<Vec<String>>;
}
