//! Paging window requested by a caller.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Default page size, also the `take` used when a request carries a
/// non-positive page size.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Request parameters for paginated queries.
///
/// Values are stored exactly as the caller supplied them; [`skip`] and
/// [`take`] derive sane offsets from them without rewriting the request.
///
/// [`skip`]: PagingRequest::skip
/// [`take`]: PagingRequest::take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PagingRequest {
    /// Page number (1-based).
    pub page: i64,
    /// Number of items per page.
    pub page_size: i64,
}

impl PagingRequest {
    /// Create a new page request.
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Number of items to skip before the requested page.
    ///
    /// Pages at or below 1 never skip. Never negative.
    pub fn skip(&self) -> i64 {
        if self.page <= 1 {
            0
        } else {
            (self.page - 1).saturating_mul(self.page_size).max(0)
        }
    }

    /// Number of items to take, falling back to [`DEFAULT_PAGE_SIZE`] for a
    /// non-positive page size.
    pub fn take(&self) -> i64 {
        if self.page_size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }
}

impl Default for PagingRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Serialize for PagingRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PagingRequest", 4)?;
        state.serialize_field("Page", &self.page)?;
        state.serialize_field("PageSize", &self.page_size)?;
        state.serialize_field("Skip", &self.skip())?;
        state.serialize_field("Take", &self.take())?;
        state.end()
    }
}
