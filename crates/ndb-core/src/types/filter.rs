//! Filter types for describing collection queries.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterOperator {
    /// Exact equality.
    Equals,
    /// Substring match.
    #[default]
    Contains,
    /// Prefix match.
    StartsWith,
    /// Suffix match.
    EndsWith,
    /// Greater than.
    GreaterThan,
    /// Less than.
    LessThan,
}

/// A single filter condition on a named field.
///
/// Construction never validates; [`FilterRequest::is_valid`] is advisory
/// and enforcement belongs to whatever executes the query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FilterRequest {
    /// The field name to filter on.
    pub field: String,
    /// The value to compare against.
    pub value: String,
    /// The comparison operator.
    pub operator: FilterOperator,
}

impl FilterRequest {
    /// Create a new filter.
    pub fn new(field: impl Into<String>, value: impl Into<String>, operator: FilterOperator) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            operator,
        }
    }

    /// Shorthand for an equality filter.
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, value, FilterOperator::Equals)
    }

    /// Shorthand for a substring filter.
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, value, FilterOperator::Contains)
    }

    /// Both field and value are non-blank.
    pub fn is_valid(&self) -> bool {
        !self.field.trim().is_empty() && !self.value.trim().is_empty()
    }
}

impl Serialize for FilterRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FilterRequest", 4)?;
        state.serialize_field("Field", &self.field)?;
        state.serialize_field("Value", &self.value)?;
        state.serialize_field("Operator", &self.operator)?;
        state.serialize_field("IsValid", &self.is_valid())?;
        state.end()
    }
}
