//! Duplicate-detection guard.
//!
//! A candidate collides with an existing record when the full name matches
//! exactly (first AND last) or the email matches exactly. Comparison is
//! case-sensitive. On update, `exclude` carries the id of the record being
//! edited so it may match itself unchanged.
//!
//! The guard is evaluated against the authoritative store state at request
//! time — the comparison set is never cached across requests, which would
//! open a stale-duplicate window between concurrent writers.

use rolodex_types::{Customer, CustomerDraft, CustomerId};

/// Conflict message returned when a create collides.
pub const CREATE_CONFLICT: &str = "Duplicate customer details found";

/// Conflict message returned when an update collides with another record.
pub const UPDATE_CONFLICT: &str = "Update causes duplication";

/// True when the candidate collides with any record other than `exclude`.
#[must_use]
pub fn is_duplicate(
    candidate: &CustomerDraft,
    existing: &[Customer],
    exclude: Option<CustomerId>,
) -> bool {
    existing
        .iter()
        .filter(|record| exclude != Some(record.id))
        .any(|record| {
            (record.first_name == candidate.first_name
                && record.last_name == candidate.last_name)
                || record.email == candidate.email
        })
}
