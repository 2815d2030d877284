//! Structured description of a collection query.

use serde::{Deserialize, Serialize};

use super::filter::FilterRequest;
use super::pagination::PagingRequest;
use super::sorting::SortRequest;
use super::validation::ValidationError;

/// Search, filter, sort and paging parameters for a list endpoint.
///
/// Filters and sorts apply in order. Construction never checks the
/// individual entries; an executor that wants to reject malformed requests
/// can use [`ListRequest::validation_errors`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRequest {
    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Field filters, applied in order.
    pub filters: Vec<FilterRequest>,
    /// Sort keys, applied in order.
    pub sorts: Vec<SortRequest>,
    /// Requested page window.
    pub paging: PagingRequest,
}

impl ListRequest {
    /// Create an empty request for the first default-sized page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Append a filter.
    pub fn filter(mut self, filter: FilterRequest) -> Self {
        self.filters.push(filter);
        self
    }

    /// Append a sort key.
    pub fn sort(mut self, sort: SortRequest) -> Self {
        self.sorts.push(sort);
        self
    }

    /// Replace the page window.
    pub fn with_paging(mut self, paging: PagingRequest) -> Self {
        self.paging = paging;
        self
    }

    /// Whether a non-blank search term was supplied.
    pub fn has_search(&self) -> bool {
        self.search
            .as_deref()
            .is_some_and(|search| !search.trim().is_empty())
    }

    /// Filters that pass [`FilterRequest::is_valid`], in order.
    pub fn valid_filters(&self) -> impl Iterator<Item = &FilterRequest> {
        self.filters.iter().filter(|f| f.is_valid())
    }

    /// Sorts that pass [`SortRequest::is_valid`], in order.
    pub fn valid_sorts(&self) -> impl Iterator<Item = &SortRequest> {
        self.sorts.iter().filter(|s| s.is_valid())
    }

    /// One entry per invalid filter or sort, filters first.
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        let filter_errors = self
            .filters
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.is_valid())
            .map(|(i, _)| {
                ValidationError::new(format!("Filters[{i}]"), "Filter field and value are required")
            });

        let sort_errors = self
            .sorts
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_valid())
            .map(|(i, _)| ValidationError::new(format!("Sorts[{i}]"), "Sort field is required"));

        let errors: Vec<ValidationError> = filter_errors.chain(sort_errors).collect();
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "List request has invalid entries");
        }
        errors
    }
}
