//! NDB Abstraction: request and outcome contracts for service boundaries.
//!
//! Re-exports the workspace crates under one name:
//!
//! - [`ndb_core`]: status taxonomy, request objects, paging calculus,
//!   configuration and the infrastructure error type.
//! - [`ndb_results`]: the outcome family.
//!
//! Most callers only need the [`prelude`].

pub use ndb_core;
pub use ndb_results;

/// Commonly used types and traits.
pub mod prelude {
    pub use ndb_core::config::ContractsConfig;
    pub use ndb_core::error::{ContractError, ErrorKind};
    pub use ndb_core::result::ContractResult;
    pub use ndb_core::status::ResultStatus;
    pub use ndb_core::types::{
        FilterOperator, FilterRequest, ListRequest, PageInfo, PagingRequest, SortDirection,
        SortRequest, ValidationError,
    };
    pub use ndb_results::{
        CollectionOutcome, DataOutcome, ListOutcome, Outcome, PagedOutcome, SimpleOutcome,
        ValidationOutcome,
    };
}
