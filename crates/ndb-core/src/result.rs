//! Convenience result type alias for NDB infrastructure code.

use crate::error::ContractError;

/// A specialized `Result` type for configuration, logging and decoding.
///
/// Domain outcomes are not expressed with this type; see the outcome
/// family in `ndb-results` for those.
pub type ContractResult<T> = Result<T, ContractError>;
