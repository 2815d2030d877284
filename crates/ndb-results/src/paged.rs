//! Outcome carrying one page of items.

use serde::{Deserialize, Serialize};

use ndb_core::error::ContractError;
use ndb_core::status::ResultStatus;
use ndb_core::types::{PageInfo, PagingRequest};

use crate::outcome::{CollectionOutcome, DEFAULT_MESSAGE, Outcome, sealed};

/// An outcome with one page of items and its pagination metadata.
///
/// Failed outcomes carry [`PageInfo::ZEROED`], not [`PageInfo::EMPTY`].
/// Decoding fills a missing `PageInfo` with the zeroed descriptor and
/// rejects a failed outcome with items or any other page info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "PascalCase",
    try_from = "RawPagedOutcome<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct PagedOutcome<T> {
    status: ResultStatus,
    message: String,
    items: Vec<T>,
    page_info: PageInfo,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase", bound(deserialize = "T: Deserialize<'de>"))]
struct RawPagedOutcome<T> {
    status: ResultStatus,
    #[serde(default)]
    message: String,
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    #[serde(default = "zeroed")]
    page_info: PageInfo,
}

fn zeroed() -> PageInfo {
    PageInfo::ZEROED
}

impl<T> TryFrom<RawPagedOutcome<T>> for PagedOutcome<T> {
    type Error = ContractError;

    fn try_from(raw: RawPagedOutcome<T>) -> Result<Self, Self::Error> {
        if !raw.status.is_success() && (!raw.items.is_empty() || raw.page_info != PageInfo::ZEROED)
        {
            return Err(ContractError::validation(format!(
                "{} outcome cannot carry items or page info",
                raw.status
            )));
        }
        Ok(Self {
            status: raw.status,
            message: raw.message,
            items: raw.items,
            page_info: raw.page_info,
        })
    }
}

impl<T> PagedOutcome<T> {
    /// Successful outcome for the given page window and item total.
    pub fn ok(items: Vec<T>, page: i64, page_size: i64, total_items: i64) -> Self {
        Self::ok_with_message(items, page, page_size, total_items, DEFAULT_MESSAGE)
    }

    /// Successful outcome with a custom message.
    pub fn ok_with_message(
        items: Vec<T>,
        page: i64,
        page_size: i64,
        total_items: i64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: ResultStatus::Success,
            message: message.into(),
            items,
            page_info: PageInfo::create(page, page_size, total_items),
        }
    }

    /// Successful outcome echoing the window the caller asked for.
    pub fn from_request(items: Vec<T>, paging: &PagingRequest, total_items: i64) -> Self {
        Self::ok(items, paging.page, paging.page_size, total_items)
    }

    /// Pagination metadata.
    pub fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    /// Transform each item, keeping status, message and page info.
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> PagedOutcome<U> {
        PagedOutcome {
            status: self.status,
            message: self.message,
            items: self.items.into_iter().map(f).collect(),
            page_info: self.page_info,
        }
    }
}

impl<T> sealed::Sealed for PagedOutcome<T> {}

impl<T> Outcome for PagedOutcome<T> {
    fn status(&self) -> ResultStatus {
        self.status
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn fail(status: ResultStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            items: Vec::new(),
            page_info: PageInfo::ZEROED,
        }
    }
}

impl<T> CollectionOutcome for PagedOutcome<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}
