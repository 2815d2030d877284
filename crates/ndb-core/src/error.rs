//! Infrastructure error types for the NDB contracts.
//!
//! Domain failures are outcome values, never errors. [`ContractError`]
//! covers what can go wrong around them: loading configuration, installing
//! the log subscriber, decoding payloads. It converts into an outcome
//! status through [`ContractError::status`].

use std::fmt;
use thiserror::Error;

use crate::status::ResultStatus;

/// Error kind categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Input validation failed.
    Validation,
    /// The requested resource was not found.
    NotFound,
    /// Credentials were missing or invalid.
    Unauthorized,
    /// The caller does not have permission to perform the action.
    Forbidden,
    /// A conflict occurred (duplicate entry, concurrent modification, etc.).
    Conflict,
    /// An internal error occurred.
    Internal,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// Binary payload encoding or decoding failed.
    Encoding,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Encoding => write!(f, "ENCODING"),
        }
    }
}

impl ErrorKind {
    /// The outcome status a failure of this kind is reported as.
    pub fn status(&self) -> ResultStatus {
        match self {
            Self::Validation | Self::Serialization | Self::Encoding => ResultStatus::BadRequest,
            Self::NotFound => ResultStatus::NotFound,
            Self::Unauthorized => ResultStatus::Unauthorized,
            Self::Forbidden => ResultStatus::Forbidden,
            Self::Conflict => ResultStatus::Conflict,
            Self::Internal | Self::Configuration => ResultStatus::Error,
        }
    }
}

/// The error used by NDB infrastructure code.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct ContractError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ContractError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an encoding error.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Encoding, message)
    }

    /// The outcome status this error is reported as.
    pub fn status(&self) -> ResultStatus {
        self.kind.status()
    }
}

impl Clone for ContractError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for ContractError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<base64::DecodeError> for ContractError {
    fn from(err: base64::DecodeError) -> Self {
        Self::with_source(ErrorKind::Encoding, format!("Base64 decode error: {err}"), err)
    }
}

impl From<config::ConfigError> for ContractError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
