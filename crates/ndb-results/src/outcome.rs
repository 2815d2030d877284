//! The [`Outcome`] trait and the payload-free [`SimpleOutcome`].

use serde::{Deserialize, Serialize};

use ndb_core::error::ContractError;
use ndb_core::status::ResultStatus;

/// Message attached to successful outcomes unless the caller supplies one.
pub const DEFAULT_MESSAGE: &str = "OK";

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Behaviour shared by every outcome variant.
///
/// The trait is sealed: the variants in this crate are the whole family.
/// `succeeded` is always derived from the status and cannot disagree with it.
pub trait Outcome: sealed::Sealed + Sized {
    /// The status tag.
    fn status(&self) -> ResultStatus;

    /// The human-readable message.
    fn message(&self) -> &str;

    /// Build an outcome with the given status and no payload.
    ///
    /// Works for every status, including ones without a named factory such
    /// as [`ResultStatus::Forbidden`] and [`ResultStatus::Conflict`].
    fn fail(status: ResultStatus, message: impl Into<String>) -> Self;

    /// Whether the status is [`ResultStatus::Success`].
    fn succeeded(&self) -> bool {
        self.status().is_success()
    }

    /// Malformed or invalid request.
    fn bad_request(message: impl Into<String>) -> Self {
        Self::fail(ResultStatus::BadRequest, message)
    }

    /// Missing or invalid credentials.
    fn unauthorized(message: impl Into<String>) -> Self {
        Self::fail(ResultStatus::Unauthorized, message)
    }

    /// Referenced entity absent.
    fn not_found(message: impl Into<String>) -> Self {
        Self::fail(ResultStatus::NotFound, message)
    }

    /// Unclassified or internal failure.
    fn error(message: impl Into<String>) -> Self {
        Self::fail(ResultStatus::Error, message)
    }

    /// Report an infrastructure error as an outcome of this variant.
    fn from_error(error: &ContractError) -> Self {
        Self::fail(error.status(), error.message.clone())
    }

    /// Status and message only, without payload.
    fn to_simple(&self) -> SimpleOutcome {
        SimpleOutcome::new(self.status(), self.message())
    }
}

/// Outcomes that carry an ordered list of items.
pub trait CollectionOutcome: Outcome {
    /// Item type.
    type Item;

    /// The items, in order.
    fn items(&self) -> &[Self::Item];

    /// Take ownership of the items.
    fn into_items(self) -> Vec<Self::Item>;

    /// Number of items carried (not the total across pages).
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Whether no items are carried.
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// An outcome with a status and message but no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimpleOutcome {
    status: ResultStatus,
    #[serde(default)]
    message: String,
}

impl SimpleOutcome {
    pub(crate) fn new(status: ResultStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Successful outcome with the default message.
    pub fn ok() -> Self {
        Self::ok_with_message(DEFAULT_MESSAGE)
    }

    /// Successful outcome with a custom message.
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self::new(ResultStatus::Success, message)
    }
}

impl sealed::Sealed for SimpleOutcome {}

impl Outcome for SimpleOutcome {
    fn status(&self) -> ResultStatus {
        self.status
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn fail(status: ResultStatus, message: impl Into<String>) -> Self {
        Self::new(status, message)
    }
}
