//! Conversion from Commerce Layer resources to picker products.

use sku_picker_core::Product;

use super::types::SkuResource;

/// Convert a SKU resource into the product record the picker displays.
///
/// SKUs without an image get an empty image URL.
#[must_use]
pub fn sku_to_product(resource: SkuResource) -> Product {
    let SkuResource { id, attributes, .. } = resource;

    Product {
        id,
        sku: attributes.code,
        name: attributes.name,
        image: attributes.image_url.unwrap_or_default(),
        is_missing: false,
    }
}
