//! Field-level validation error entries.

use serde::{Deserialize, Serialize};

/// A single validation failure attached to a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidationError {
    /// Path of the offending field, e.g. `Email` or `Filters[2]`.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
