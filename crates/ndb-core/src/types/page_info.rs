//! Pagination metadata carried by paged outcomes.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Immutable pagination descriptor.
///
/// `total_pages` is derived, never stored. [`PageInfo::create`] does not
/// clamp or validate; callers supply sane values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageInfo {
    page: i64,
    page_size: i64,
    total_items: i64,
}

impl PageInfo {
    /// Canonical empty descriptor: page 1, no page size, no items.
    pub const EMPTY: PageInfo = PageInfo {
        page: 1,
        page_size: 0,
        total_items: 0,
    };

    /// All-zero descriptor attached to failed paged outcomes.
    pub const ZEROED: PageInfo = PageInfo {
        page: 0,
        page_size: 0,
        total_items: 0,
    };

    /// Build a descriptor from the requested window and the item total.
    pub const fn create(page: i64, page_size: i64, total_items: i64) -> Self {
        Self {
            page,
            page_size,
            total_items,
        }
    }

    /// Current page number (1-based).
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Number of items per page.
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Total number of items across all pages.
    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// `ceil(total_items / page_size)`, or 0 when the page size is not positive.
    pub fn total_pages(&self) -> i64 {
        if self.page_size <= 0 {
            return 0;
        }
        let quotient = self.total_items / self.page_size;
        if self.total_items % self.page_size > 0 {
            quotient + 1
        } else {
            quotient
        }
    }

    /// Whether a page follows the current one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Whether a page precedes the current one.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Serialize for PageInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PageInfo", 4)?;
        state.serialize_field("Page", &self.page)?;
        state.serialize_field("PageSize", &self.page_size)?;
        state.serialize_field("TotalItems", &self.total_items)?;
        state.serialize_field("TotalPages", &self.total_pages())?;
        state.end()
    }
}
