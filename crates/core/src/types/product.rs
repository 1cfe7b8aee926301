//! Product records consumed by the host picker.

use serde::{Deserialize, Serialize};

use super::pagination::PaginationInfo;

/// A product as the picker displays it.
///
/// Placeholder records (`is_missing == true`) stand in for SKUs that were
/// requested but not returned by the backend. They carry only the requested
/// SKU so callers always get one record per requested SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend resource ID (empty for placeholders).
    pub id: String,
    /// SKU code.
    pub sku: String,
    /// Display name (empty for placeholders).
    pub name: String,
    /// Image URL (empty when the backend has none, and for placeholders).
    pub image: String,
    /// Whether the backend returned no record for this SKU.
    #[serde(default)]
    pub is_missing: bool,
}

impl Product {
    /// Create a placeholder for a SKU the backend did not return.
    #[must_use]
    pub fn missing(sku: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            sku: sku.into(),
            name: String::new(),
            image: String::new(),
            is_missing: true,
        }
    }
}

/// One page of products with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsPage {
    pub pagination: PaginationInfo,
    pub products: Vec<Product>,
}
