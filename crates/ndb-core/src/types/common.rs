//! Reference, lookup and file payload value types.
//!
//! Plain holders that outcomes carry as payload. They have no behaviour
//! beyond construction, except [`FileObject`], which can encode and decode
//! its base64 content.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::result::ContractResult;

/// A selectable option for dropdowns, radio buttons and selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LookupItem<T> {
    /// Underlying value.
    pub value: T,
    /// Display label.
    pub label: String,
    /// Whether the option is shown but not selectable.
    #[serde(default)]
    pub disabled: bool,
}

impl<T> LookupItem<T> {
    /// Create an enabled lookup item.
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark the item as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Identifier plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReferenceItem<TId> {
    /// Identifier.
    pub id: TId,
    /// Display label.
    pub label: String,
}

impl<TId> ReferenceItem<TId> {
    /// Create a reference item.
    pub fn new(id: TId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Identifier, business code and display label, for master data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReferenceCodeItem<TId> {
    /// Identifier.
    pub id: TId,
    /// Business code.
    pub code: String,
    /// Display label.
    pub label: String,
}

impl<TId> ReferenceCodeItem<TId> {
    /// Create a reference code item.
    pub fn new(id: TId, code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            label: label.into(),
        }
    }
}

/// A key paired with a string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyValueItem<K> {
    /// Key.
    pub key: K,
    /// Value.
    pub value: String,
}

impl<K> KeyValueItem<K> {
    /// Create a key-value item.
    pub fn new(key: K, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// A reference item filed under a category, for grouped selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupedReferenceItem<T> {
    /// Underlying value.
    pub value: T,
    /// Display label.
    pub label: String,
    /// Group name.
    pub group: String,
}

impl<T> GroupedReferenceItem<T> {
    /// Create a grouped reference item.
    pub fn new(value: T, label: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            group: group.into(),
        }
    }
}

/// A file transported as base64 text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FileObject {
    /// Original file name.
    pub filename: String,
    /// MIME type.
    pub mime_type: String,
    /// Standard base64 encoding of the content.
    pub base64: String,
}

impl FileObject {
    /// Encode raw bytes into a file object.
    pub fn from_bytes(
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            base64: STANDARD.encode(bytes),
        }
    }

    /// Decode the base64 content.
    pub fn decode(&self) -> ContractResult<Vec<u8>> {
        Ok(STANDARD.decode(self.base64.as_bytes())?)
    }
}

/// A file transported as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FileByteObject {
    /// Raw content, if loaded.
    pub file: Option<Vec<u8>>,
    /// Original file name.
    pub filename: String,
    /// MIME type.
    pub mime_type: String,
}

impl From<FileByteObject> for FileObject {
    fn from(file: FileByteObject) -> Self {
        Self::from_bytes(
            file.filename,
            file.mime_type,
            file.file.as_deref().unwrap_or_default(),
        )
    }
}
