//! Outcome carrying a single payload value.

use serde::{Deserialize, Deserializer, Serialize};

use ndb_core::error::ContractError;
use ndb_core::result::ContractResult;
use ndb_core::status::ResultStatus;

use crate::outcome::{DEFAULT_MESSAGE, Outcome, sealed};

/// An outcome with an optional payload.
///
/// Only [`DataOutcome::ok`] stores data; every failure factory leaves it
/// absent, and absent data is omitted when serialized. Decoding rejects a
/// failed outcome that carries data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "PascalCase",
    try_from = "RawDataOutcome<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct DataOutcome<T> {
    status: ResultStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

/// Wire shape before the status/payload check.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase", bound(deserialize = "T: Deserialize<'de>"))]
struct RawDataOutcome<T> {
    status: ResultStatus,
    #[serde(default)]
    message: String,
    #[serde(default = "absent", deserialize_with = "present")]
    data: Option<T>,
}

fn absent<T>() -> Option<T> {
    None
}

/// A present `Data` key is a payload even when it encodes as `null`.
fn present<'de, D: Deserializer<'de>, T: Deserialize<'de>>(
    deserializer: D,
) -> Result<Option<T>, D::Error> {
    T::deserialize(deserializer).map(Some)
}

impl<T> TryFrom<RawDataOutcome<T>> for DataOutcome<T> {
    type Error = ContractError;

    fn try_from(raw: RawDataOutcome<T>) -> Result<Self, Self::Error> {
        if !raw.status.is_success() && raw.data.is_some() {
            return Err(ContractError::validation(format!(
                "{} outcome cannot carry data",
                raw.status
            )));
        }
        Ok(Self {
            status: raw.status,
            message: raw.message,
            data: raw.data,
        })
    }
}

impl<T> DataOutcome<T> {
    /// Successful outcome carrying `data`.
    pub fn ok(data: T) -> Self {
        Self::ok_with_message(data, DEFAULT_MESSAGE)
    }

    /// Successful outcome carrying `data` with a custom message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status: ResultStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    /// The payload, if any.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Take ownership of the payload, if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Transform the payload, keeping status and message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DataOutcome<U> {
        DataOutcome {
            status: self.status,
            message: self.message,
            data: self.data.map(f),
        }
    }
}

impl<T> sealed::Sealed for DataOutcome<T> {}

impl<T> Outcome for DataOutcome<T> {
    fn status(&self) -> ResultStatus {
        self.status
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn fail(status: ResultStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }
}

impl<T> From<ContractResult<T>> for DataOutcome<T> {
    fn from(result: ContractResult<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::from_error(&err),
        }
    }
}
