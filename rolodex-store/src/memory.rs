//! In-memory reference store.
//!
//! Backs the HTTP server and the test suites. Rows live behind a tokio
//! `RwLock`; the duplicate guard is enforced inside `create`/`update` so
//! the store contract holds when used embedded, independent of the
//! server-side guard middleware.

use crate::guard::{self, CREATE_CONFLICT, UPDATE_CONFLICT};
use crate::{RecordStore, StoreError, StoreResult};
use async_trait::async_trait;
use rolodex_types::{Customer, CustomerDraft, CustomerId, CustomerPage};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Records per listing page unless overridden.
pub const DEFAULT_PAGE_SIZE: usize = 10;

const DEFAULT_TITLES: [&str; 5] = [
    "Account Executive",
    "Customer Success Manager",
    "Marketing Manager",
    "Operations Analyst",
    "Software Engineer",
];

const DEFAULT_COUNTRIES: [&str; 6] = [
    "Germany",
    "Japan",
    "Philippines",
    "Singapore",
    "Thailand",
    "United States",
];

/// In-memory customer record store.
pub struct MemoryStore {
    rows: RwLock<Vec<Customer>>,
    titles: Vec<String>,
    countries: Vec<String>,
    page_size: usize,
}

impl MemoryStore {
    /// Creates an empty store with the built-in option lists.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(
            DEFAULT_TITLES.iter().map(ToString::to_string).collect(),
            DEFAULT_COUNTRIES.iter().map(ToString::to_string).collect(),
        )
    }

    /// Creates an empty store with custom option lists.
    #[must_use]
    pub fn with_options(titles: Vec<String>, countries: Vec<String>) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            titles,
            countries,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Overrides the listing page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Loads initial records, assigning fresh ids. Drafts colliding with
    /// already-loaded rows are skipped. Returns the number inserted.
    pub async fn seed(&self, drafts: Vec<CustomerDraft>) -> usize {
        let mut rows = self.rows.write().await;
        let mut inserted = 0;
        for draft in drafts {
            if guard::is_duplicate(&draft, &rows, None) {
                warn!(email = %draft.email, "skipping duplicate seed record");
                continue;
            }
            rows.push(Customer::from_draft(CustomerId::new(), &draft));
            inserted += 1;
        }
        inserted
    }

    /// The full row set, for per-request duplicate checks.
    pub async fn snapshot(&self) -> Vec<Customer> {
        self.rows.read().await.clone()
    }

    fn matches(record: &Customer, needle: &str) -> bool {
        [
            record.first_name.as_str(),
            record.last_name.as_str(),
            record.title.as_str(),
            record.email.as_str(),
            record.country.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self, search: &str, page: u32) -> StoreResult<CustomerPage> {
        let page = page.max(1) as usize;
        let rows = self.rows.read().await;

        let needle = search.to_lowercase();
        let matched: Vec<&Customer> = if search.is_empty() {
            rows.iter().collect()
        } else {
            rows.iter()
                .filter(|record| Self::matches(record, &needle))
                .collect()
        };

        let total_pages = matched.len().div_ceil(self.page_size) as u32;
        let records = matched
            .into_iter()
            .skip((page - 1) * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect();

        Ok(CustomerPage {
            records,
            total_pages,
        })
    }

    async fn create(&self, draft: &CustomerDraft) -> StoreResult<Customer> {
        let mut rows = self.rows.write().await;
        if guard::is_duplicate(draft, &rows, None) {
            return Err(StoreError::Conflict(CREATE_CONFLICT.to_string()));
        }
        let record = Customer::from_draft(CustomerId::new(), draft);
        rows.push(record.clone());
        debug!(id = %record.id, "created customer");
        Ok(record)
    }

    async fn update(&self, id: CustomerId, draft: &CustomerDraft) -> StoreResult<Customer> {
        let mut rows = self.rows.write().await;
        if !rows.iter().any(|record| record.id == id) {
            return Err(StoreError::NotFound(id));
        }
        if guard::is_duplicate(draft, &rows, Some(id)) {
            return Err(StoreError::Conflict(UPDATE_CONFLICT.to_string()));
        }
        let record = rows
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.apply_draft(draft);
        debug!(%id, "updated customer");
        Ok(record.clone())
    }

    async fn delete(&self, id: CustomerId) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        let index = rows
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        rows.remove(index);
        debug!(%id, "deleted customer");
        Ok(())
    }

    async fn titles(&self) -> StoreResult<Vec<String>> {
        Ok(self.titles.clone())
    }

    async fn countries(&self) -> StoreResult<Vec<String>> {
        Ok(self.countries.clone())
    }
}
