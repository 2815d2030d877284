//! # ndb-results
//!
//! The outcome family returned across NDB service boundaries. Every
//! variant carries a [`ResultStatus`](ndb_core::ResultStatus) and a message;
//! the variants differ only in payload:
//!
//! - [`SimpleOutcome`]: no payload.
//! - [`DataOutcome`]: a single optional value.
//! - [`ListOutcome`]: items plus a total count.
//! - [`PagedOutcome`]: items plus [`PageInfo`](ndb_core::types::PageInfo).
//! - [`ValidationOutcome`]: field-level validation errors.
//!
//! Failure factories live on the sealed [`Outcome`] trait so each variant
//! returns its own type from `bad_request`, `not_found` and friends.

pub mod data;
#[cfg(feature = "http")]
pub mod http;
pub mod list;
pub mod outcome;
pub mod paged;
pub mod validation;

pub use data::DataOutcome;
pub use list::ListOutcome;
pub use outcome::{CollectionOutcome, DEFAULT_MESSAGE, Outcome, SimpleOutcome};
pub use paged::PagedOutcome;
pub use validation::ValidationOutcome;
