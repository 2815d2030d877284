//! # ndb-core
//!
//! Leaf crate for the NDB contracts. Contains the outcome status taxonomy,
//! the request objects callers use to describe filtered, sorted and paged
//! collections, the paging calculus shared by every collection outcome,
//! configuration schemas, and the infrastructure error type.
//!
//! This crate has **no** internal dependencies on other NDB crates.

pub mod config;
pub mod error;
pub mod result;
pub mod status;
pub mod types;

pub use error::ContractError;
pub use result::ContractResult;
pub use status::ResultStatus;
