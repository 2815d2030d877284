//! Outcome carrying a list of items and a total count.

use serde::{Deserialize, Serialize};

use ndb_core::error::ContractError;
use ndb_core::status::ResultStatus;

use crate::outcome::{CollectionOutcome, DEFAULT_MESSAGE, Outcome, sealed};

/// An outcome with items and a total count independent of paging.
///
/// Decoding rejects a failed outcome with items or a non-zero total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "PascalCase",
    try_from = "RawListOutcome<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct ListOutcome<T> {
    status: ResultStatus,
    message: String,
    items: Vec<T>,
    total_count: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase", bound(deserialize = "T: Deserialize<'de>"))]
struct RawListOutcome<T> {
    status: ResultStatus,
    #[serde(default)]
    message: String,
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    #[serde(default)]
    total_count: i64,
}

impl<T> TryFrom<RawListOutcome<T>> for ListOutcome<T> {
    type Error = ContractError;

    fn try_from(raw: RawListOutcome<T>) -> Result<Self, Self::Error> {
        if !raw.status.is_success() && (!raw.items.is_empty() || raw.total_count != 0) {
            return Err(ContractError::validation(format!(
                "{} outcome cannot carry items or a total count",
                raw.status
            )));
        }
        Ok(Self {
            status: raw.status,
            message: raw.message,
            items: raw.items,
            total_count: raw.total_count,
        })
    }
}

impl<T> ListOutcome<T> {
    /// Successful outcome whose total count is the number of items.
    pub fn ok(items: Vec<T>) -> Self {
        Self::ok_with(items, None, DEFAULT_MESSAGE)
    }

    /// Successful outcome with an explicit total count.
    pub fn ok_with_total(items: Vec<T>, total_count: i64) -> Self {
        Self::ok_with(items, Some(total_count), DEFAULT_MESSAGE)
    }

    /// Successful outcome.
    ///
    /// When `total_count` is `None` it is derived from the number of items;
    /// an explicit value, including 0, is kept as given.
    pub fn ok_with(items: Vec<T>, total_count: Option<i64>, message: impl Into<String>) -> Self {
        let total_count =
            total_count.unwrap_or_else(|| i64::try_from(items.len()).unwrap_or(i64::MAX));
        Self {
            status: ResultStatus::Success,
            message: message.into(),
            items,
            total_count,
        }
    }

    /// Total number of matching items.
    pub fn total_count(&self) -> i64 {
        self.total_count
    }

    /// Transform each item, keeping status, message and total count.
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> ListOutcome<U> {
        ListOutcome {
            status: self.status,
            message: self.message,
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}

impl<T> sealed::Sealed for ListOutcome<T> {}

impl<T> Outcome for ListOutcome<T> {
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
            total_count: 0,
        }
    }
}

impl<T> CollectionOutcome for ListOutcome<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}
