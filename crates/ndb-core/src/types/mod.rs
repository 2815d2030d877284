//! Request objects, pagination metadata and payload value types.

pub mod common;
pub mod filter;
pub mod list_request;
pub mod page_info;
pub mod pagination;
pub mod sorting;
pub mod validation;

pub use common::{
    FileByteObject, FileObject, GroupedReferenceItem, KeyValueItem, LookupItem,
    ReferenceCodeItem, ReferenceItem,
};
pub use filter::{FilterOperator, FilterRequest};
pub use list_request::ListRequest;
pub use page_info::PageInfo;
pub use pagination::{DEFAULT_PAGE_SIZE, PagingRequest};
pub use sorting::{SortDirection, SortRequest};
pub use validation::ValidationError;
