//! Paging defaults for query executors.

use serde::{Deserialize, Serialize};

use crate::types::pagination::{DEFAULT_PAGE_SIZE, PagingRequest};

/// Paging policy an executor applies before running a query.
///
/// [`PagingRequest`] keeps whatever the caller sent; this policy is where an
/// executor decides to clamp it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size used when the caller sends a non-positive one.
    pub default_page_size: i64,
    /// Upper bound on the page size, if any.
    pub max_page_size: Option<i64>,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: None,
        }
    }
}

impl PagingConfig {
    /// First page at the configured default size.
    pub fn default_request(&self) -> PagingRequest {
        PagingRequest::new(1, self.default_page_size)
    }

    /// Clamp a caller's request to this policy.
    ///
    /// The page becomes at least 1, a non-positive size becomes the default
    /// size, and the size is capped at `max_page_size` when one is set. The
    /// result always has a page size of at least 1, even when the policy
    /// itself is misconfigured.
    pub fn normalize(&self, request: PagingRequest) -> PagingRequest {
        let page = request.page.max(1);
        let mut page_size = if request.page_size <= 0 {
            self.default_page_size
        } else {
            request.page_size
        };
        if let Some(max) = self.max_page_size {
            page_size = page_size.min(max);
        }
        let page_size = page_size.max(1);

        let normalized = PagingRequest::new(page, page_size);
        if normalized != request {
            tracing::debug!(
                requested_page = request.page,
                requested_page_size = request.page_size,
                page,
                page_size,
                "Normalized paging request"
            );
        }
        normalized
    }
}
