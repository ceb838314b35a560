//! Query cache, fetch orchestration, and mutation coordination.
//!
//! The orchestrator owns cached listing results keyed by
//! [`QueryKey`] (search text + page). Overlapping fetches for the same key
//! are resolved by generation tagging: every dispatch takes the next value
//! of a monotonic counter, and a response older than the newest dispatched
//! generation for its key is discarded on arrival, never applied. While a
//! refetch is pending the view keeps seeing the last ready data instead of
//! an empty flash.
//!
//! The [`MutationCoordinator`] sequences writes: validate, persist,
//! invalidate every cache entry, then eagerly refetch the active key so
//! the next view read reflects the store's new state.

mod coordinator;
mod entry;
mod orchestrator;
mod query;

pub use coordinator::{MutationCoordinator, MutationError, OptionLists};
pub use entry::{CacheEntry, EntryStatus};
pub use orchestrator::{FetchOrchestrator, ListView};
pub use query::QueryKey;
