//! Host field types.

use serde::{Deserialize, Serialize};

/// Declared type of the host field the picker writes into.
///
/// Only the distinction between list fields and everything else matters to
/// the picker, but the original type name is kept so it can be echoed back
/// to the host unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// A list field; the editor may pick several products.
    Array,
    /// A single short-text field.
    Symbol,
    /// Any other field type reported by the host.
    Other(String),
}

impl FieldType {
    /// Whether the field stores more than one SKU.
    #[must_use]
    pub const fn accepts_multiple(&self) -> bool {
        matches!(self, Self::Array)
    }

    /// Get the host's name for this field type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Array => "Array",
            Self::Symbol => "Symbol",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Array" => Self::Array,
            "Symbol" => Self::Symbol,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for FieldType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Other(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
