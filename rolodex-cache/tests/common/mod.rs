//! Shared test doubles for the cache suites.
#![allow(dead_code)]

use async_trait::async_trait;
use rolodex_store::{MemoryStore, RecordStore, StoreError, StoreResult};
use rolodex_types::{Customer, CustomerDraft, CustomerId, CustomerPage};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

pub fn customer(first: &str) -> Customer {
    Customer {
        id: CustomerId::new(),
        first_name: first.to_string(),
        last_name: "Tester".to_string(),
        title: "Software Engineer".to_string(),
        email: format!("{}@x.com", first.to_lowercase()),
        country: "Thailand".to_string(),
    }
}

pub fn page_of(names: &[&str], total_pages: u32) -> CustomerPage {
    CustomerPage {
        records: names.iter().map(|name| customer(name)).collect(),
        total_pages,
    }
}

/// A store whose `list` responses are held until the test releases them,
/// letting tests interleave overlapping fetches deterministically.
#[derive(Default)]
pub struct GatedStore {
    pending: Mutex<VecDeque<oneshot::Sender<StoreResult<CustomerPage>>>>,
}

impl GatedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for the next dispatched `list` call (in dispatch order) and
    /// hands back its response channel.
    pub async fn responder(&self) -> oneshot::Sender<StoreResult<CustomerPage>> {
        loop {
            if let Some(sender) = self.pending.lock().unwrap().pop_front() {
                return sender;
            }
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl RecordStore for GatedStore {
    async fn list(&self, _search: &str, _page: u32) -> StoreResult<CustomerPage> {
        let (sender, receiver) = oneshot::channel();
        self.pending.lock().unwrap().push_back(sender);
        receiver
            .await
            .unwrap_or_else(|_| Err(StoreError::Transport("gate dropped".to_string())))
    }

    async fn create(&self, _draft: &CustomerDraft) -> StoreResult<Customer> {
        Err(StoreError::Transport("gated store has no mutations".to_string()))
    }

    async fn update(&self, id: CustomerId, _draft: &CustomerDraft) -> StoreResult<Customer> {
        Err(StoreError::NotFound(id))
    }

    async fn delete(&self, id: CustomerId) -> StoreResult<()> {
        Err(StoreError::NotFound(id))
    }

    async fn titles(&self) -> StoreResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn countries(&self) -> StoreResult<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Wraps a `MemoryStore` and counts `list` calls, to observe cache hits.
pub struct CountingStore {
    inner: MemoryStore,
    list_calls: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Row count of the wrapped store, bypassing the cache entirely.
    pub async fn inner_len(&self) -> usize {
        self.inner.snapshot().await.len()
    }
}

#[async_trait]
impl RecordStore for CountingStore {
    async fn list(&self, search: &str, page: u32) -> StoreResult<CustomerPage> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list(search, page).await
    }

    async fn create(&self, draft: &CustomerDraft) -> StoreResult<Customer> {
        self.inner.create(draft).await
    }

    async fn update(&self, id: CustomerId, draft: &CustomerDraft) -> StoreResult<Customer> {
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: CustomerId) -> StoreResult<()> {
        self.inner.delete(id).await
    }

    async fn titles(&self) -> StoreResult<Vec<String>> {
        self.inner.titles().await
    }

    async fn countries(&self) -> StoreResult<Vec<String>> {
        self.inner.countries().await
    }
}
