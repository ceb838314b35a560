//! Paginated listing envelope.

use crate::Customer;
use serde::{Deserialize, Serialize};

/// One page of customer records plus the page-count indicator.
///
/// `total_pages == 0` signals "no pagination available" — the result set
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPage {
    pub records: Vec<Customer>,
    pub total_pages: u32,
}

impl CustomerPage {
    /// The empty page: no records, no pagination.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            total_pages: 0,
        }
    }
}
