//! Fetch orchestration over the query cache.
//!
//! The cache map sits behind a synchronous mutex so `get` stays
//! synchronous; the lock is held only for map access, never across an
//! await. A fetch is two critical sections — dispatch (generation
//! assignment, entry marked pending) and completion (apply or discard) —
//! with the store call suspended in between.

use crate::{CacheEntry, EntryStatus, QueryKey};
use rolodex_store::{RecordStore, StoreResult};
use rolodex_types::{Customer, CustomerPage};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// What the view renders for a key: records plus whether a newer result is
/// still on its way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub records: Vec<Customer>,
    pub total_pages: u32,
    pub status: EntryStatus,
    /// True while the shown records are last-known-good data and a fetch
    /// for the key is outstanding or due.
    pub refreshing: bool,
}

impl ListView {
    fn empty(status: EntryStatus) -> Self {
        Self {
            records: Vec::new(),
            total_pages: 0,
            status,
            refreshing: true,
        }
    }
}

/// Last successfully resolved listing, kept for flicker-free key changes.
#[derive(Debug, Clone)]
struct ReadySnapshot {
    records: Vec<Customer>,
    total_pages: u32,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<QueryKey, CacheEntry>,
    last_ready: Option<ReadySnapshot>,
    active: Option<QueryKey>,
}

/// Owns cached listing results and the in-flight requests updating them.
pub struct FetchOrchestrator {
    store: Arc<dyn RecordStore>,
    state: Mutex<CacheState>,
    generation: AtomicU64,
}

impl FetchOrchestrator {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            state: Mutex::new(CacheState::default()),
            generation: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Synchronous snapshot of the entry for a key. `None` means the key
    /// has never been dispatched.
    #[must_use]
    pub fn get(&self, key: &QueryKey) -> Option<CacheEntry> {
        self.lock().entries.get(key).cloned()
    }

    /// The key of the most recent fetch or view access.
    #[must_use]
    pub fn active_key(&self) -> Option<QueryKey> {
        self.lock().active.clone()
    }

    /// Returns the cached entry when it is ready and not stale; otherwise
    /// dispatches a refetch and awaits it.
    pub async fn fetch(&self, key: &QueryKey) -> CacheEntry {
        {
            let mut state = self.lock();
            state.active = Some(key.clone());
            if let Some(entry) = state.entries.get(key) {
                if entry.is_fresh() {
                    return entry.clone();
                }
            }
        }
        self.refetch(key).await
    }

    /// Unconditionally dispatches a fetch for the key and awaits it. The
    /// returned entry reflects the newest completion for the key, which may
    /// belong to a younger concurrent request than this one.
    pub async fn refetch(&self, key: &QueryKey) -> CacheEntry {
        let generation = self.begin(key);
        let result = self.store.list(key.search_text(), key.page()).await;
        self.complete(key, generation, result)
    }

    /// What the view should render for a key right now. While the key is
    /// pending (or not yet dispatched) the last ready records are exposed
    /// instead of an empty list, so pagination never flickers through
    /// empty state.
    #[must_use]
    pub fn view(&self, key: &QueryKey) -> ListView {
        let mut state = self.lock();
        state.active = Some(key.clone());
        match state.entries.get(key) {
            Some(entry) if entry.status == EntryStatus::Ready => ListView {
                records: entry.records.clone(),
                total_pages: entry.total_pages,
                status: EntryStatus::Ready,
                refreshing: entry.stale,
            },
            Some(entry) if entry.status == EntryStatus::Failed => ListView {
                records: entry.records.clone(),
                total_pages: entry.total_pages,
                status: EntryStatus::Failed,
                refreshing: false,
            },
            Some(entry) if !entry.records.is_empty() => ListView {
                records: entry.records.clone(),
                total_pages: entry.total_pages,
                status: EntryStatus::Pending,
                refreshing: true,
            },
            _ => match &state.last_ready {
                Some(previous) => ListView {
                    records: previous.records.clone(),
                    total_pages: previous.total_pages,
                    status: EntryStatus::Pending,
                    refreshing: true,
                },
                None => ListView::empty(EntryStatus::Pending),
            },
        }
    }

    /// Marks every cache entry stale. Stale entries keep serving their
    /// records through [`view`](Self::view) until the refetch resolves;
    /// non-active keys refetch lazily on next access.
    pub fn invalidate_all(&self) {
        let mut state = self.lock();
        for entry in state.entries.values_mut() {
            entry.stale = true;
        }
        debug!(entries = state.entries.len(), "invalidated cache");
    }

    /// Eagerly refetches the active key, if any.
    pub async fn refresh_active(&self) -> Option<CacheEntry> {
        let active = self.lock().active.clone();
        match active {
            Some(key) => Some(self.refetch(&key).await),
            None => None,
        }
    }

    /// Dispatch: stamp the entry with the next generation and mark it
    /// pending. Records from the previous resolution are retained.
    fn begin(&self, key: &QueryKey) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.lock();
        let entry = state
            .entries
            .entry(key.clone())
            .or_insert_with(|| CacheEntry::new(key.clone()));
        entry.generation = generation;
        entry.status = EntryStatus::Pending;
        state.active = Some(key.clone());
        debug!(%key, generation, "dispatching fetch");
        generation
    }

    /// Completion: apply the result unless a newer request for the same
    /// key was dispatched while this one was in flight.
    fn complete(
        &self,
        key: &QueryKey,
        generation: u64,
        result: StoreResult<CustomerPage>,
    ) -> CacheEntry {
        let mut state = self.lock();
        let entry = state
            .entries
            .entry(key.clone())
            .or_insert_with(|| CacheEntry::new(key.clone()));

        if generation < entry.generation {
            debug!(%key, generation, newest = entry.generation, "discarding stale response");
            return entry.clone();
        }

        match result {
            Ok(page) => {
                entry.records = page.records;
                entry.total_pages = page.total_pages;
                entry.status = EntryStatus::Ready;
                entry.stale = false;
                debug!(%key, generation, records = entry.records.len(), "fetch resolved");
                let snapshot = ReadySnapshot {
                    records: entry.records.clone(),
                    total_pages: entry.total_pages,
                };
                let resolved = entry.clone();
                state.last_ready = Some(snapshot);
                resolved
            }
            Err(error) => {
                // Previous records stay on the entry; only the status flips.
                entry.status = EntryStatus::Failed;
                warn!(%key, generation, %error, "fetch failed");
                entry.clone()
            }
        }
    }
}
