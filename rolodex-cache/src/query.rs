//! Canonical cache keys for listing queries.

use std::fmt;

/// Identifies one cacheable listing query: search text plus 1-based page.
///
/// Keys are equal iff both components are equal exactly. Construction goes
/// through [`QueryKey::resolve`] so the search/pagination coupling holds
/// everywhere: a non-empty search always lands on page 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    search_text: String,
    page: u32,
}

impl QueryKey {
    /// Derives the canonical key from current view state. Pages below 1
    /// clamp to 1; a non-empty search text forces page 1.
    #[must_use]
    pub fn resolve(search_text: &str, page: u32) -> Self {
        if search_text.is_empty() {
            Self {
                search_text: String::new(),
                page: page.max(1),
            }
        } else {
            Self {
                search_text: search_text.to_string(),
                page: 1,
            }
        }
    }

    /// Key for a plain listing page (no search).
    #[must_use]
    pub fn listing(page: u32) -> Self {
        Self::resolve("", page)
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.search_text.is_empty() {
            write!(f, "page {}", self.page)
        } else {
            write!(f, "search {:?} page {}", self.search_text, self.page)
        }
    }
}
