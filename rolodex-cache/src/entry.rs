//! Cached result state for one query key.

use crate::QueryKey;
use rolodex_types::Customer;

/// Lifecycle of a cache entry. Absent keys have no entry at all.
///
/// `Pending -> Ready | Failed`; `Ready -> Pending` on refetch;
/// `Failed -> Pending` on retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Pending,
    Ready,
    Failed,
}

/// Cached records and status for one [`QueryKey`].
///
/// `generation` is the newest request generation dispatched for this key;
/// completions carrying an older generation are discarded. Entries are
/// updated in place and marked stale by invalidation, never hard-deleted.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: QueryKey,
    pub records: Vec<Customer>,
    pub total_pages: u32,
    pub status: EntryStatus,
    pub generation: u64,
    pub stale: bool,
}

impl CacheEntry {
    /// A fresh entry for a key that is about to be fetched.
    #[must_use]
    pub fn new(key: QueryKey) -> Self {
        Self {
            key,
            records: Vec::new(),
            total_pages: 0,
            status: EntryStatus::Pending,
            generation: 0,
            stale: false,
        }
    }

    /// True when this entry can be served without a refetch.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.status == EntryStatus::Ready && !self.stale
    }
}
