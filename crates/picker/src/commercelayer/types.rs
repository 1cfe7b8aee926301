//! Commerce Layer API types.
//!
//! These types follow the JSON:API envelope the SKU endpoints return:
//! a `data` array of resources and a `meta` object with record counts.

use serde::Deserialize;

/// JSON:API response listing SKU resources.
#[derive(Debug, Clone, Deserialize)]
pub struct SkuListResponse {
    pub data: Vec<SkuResource>,
    #[serde(default)]
    pub meta: ListMeta,
}

/// Pagination metadata in list responses.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListMeta {
    /// Total records matching the request filters.
    #[serde(default)]
    pub record_count: u64,
}

/// SKU resource.
#[derive(Debug, Clone, Deserialize)]
pub struct SkuResource {
    pub id: String,
    #[serde(rename = "type", default = "sku_resource_type")]
    pub resource_type: String,
    pub attributes: SkuAttributes,
}

/// SKU attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct SkuAttributes {
    /// SKU code (the value stored in content entries).
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn sku_resource_type() -> String {
    "skus".to_string()
}
