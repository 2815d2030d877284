//! Outcome carrying field-level validation errors.

use serde::{Deserialize, Serialize};

use ndb_core::status::ResultStatus;
use ndb_core::types::ValidationError;

use crate::outcome::{DEFAULT_MESSAGE, Outcome, sealed};

/// Message used by [`ValidationOutcome::from_errors`] when errors exist.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// An outcome listing validation errors in the order they were reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidationOutcome {
    status: ResultStatus,
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ValidationError>,
}

impl ValidationOutcome {
    /// Build an outcome with every field set explicitly.
    pub fn new(
        status: ResultStatus,
        message: impl Into<String>,
        errors: Vec<ValidationError>,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            errors,
        }
    }

    /// Success when `errors` is empty, otherwise a bad request carrying them.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        if errors.is_empty() {
            Self::new(ResultStatus::Success, DEFAULT_MESSAGE, errors)
        } else {
            Self::new(ResultStatus::BadRequest, VALIDATION_FAILED_MESSAGE, errors)
        }
    }

    /// The validation errors.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl sealed::Sealed for ValidationOutcome {}

impl Outcome for ValidationOutcome {
    fn status(&self) -> ResultStatus {
        self.status
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn fail(status: ResultStatus, message: impl Into<String>) -> Self {
        Self::new(status, message, Vec::new())
    }
}
