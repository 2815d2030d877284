//! Outcome status taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of classifications an outcome can carry.
///
/// Every outcome holds exactly one of these. An outcome has succeeded if
/// and only if its status is [`ResultStatus::Success`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultStatus {
    /// The operation completed.
    Success,
    /// The request was malformed or invalid.
    BadRequest,
    /// The referenced entity does not exist.
    NotFound,
    /// Credentials were missing or invalid.
    Unauthorized,
    /// The caller is authenticated but not allowed to act.
    Forbidden,
    /// The operation clashes with current state.
    Conflict,
    /// Unclassified or internal failure.
    Error,
}

impl ResultStatus {
    /// Every status, in declaration order.
    pub const ALL: [ResultStatus; 7] = [
        Self::Success,
        Self::BadRequest,
        Self::NotFound,
        Self::Unauthorized,
        Self::Forbidden,
        Self::Conflict,
        Self::Error,
    ];

    /// Whether this status means the operation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}
