//! Product source handed to the host picker widget.
//!
//! The host picker calls back into the adapter for two things: a page of
//! products for the current search, and previews for SKUs already stored in
//! the field. [`ProductCatalog`] is that callback surface.

use futures::future::BoxFuture;
use sku_picker_core::{Pagination, Product, ProductsPage};

use crate::commercelayer::CommerceLayerClient;
use crate::error::PickerError;
use crate::params::InstallationParameters;

/// Callbacks the host picker uses to load products.
pub trait ProductCatalog: Send + Sync {
    /// Load one page of products matching `search` (empty for no filter).
    fn fetch_products<'a>(
        &'a self,
        search: &'a str,
        pagination: Pagination,
    ) -> BoxFuture<'a, Result<ProductsPage, PickerError>>;

    /// Load one product record per SKU, in the order documented by
    /// [`CommerceLayerClient::fetch_products_by_skus`].
    fn fetch_product_previews<'a>(
        &'a self,
        skus: &'a [String],
    ) -> BoxFuture<'a, Result<Vec<Product>, PickerError>>;
}

/// [`ProductCatalog`] backed by Commerce Layer for one installation.
#[derive(Debug, Clone)]
pub struct CommerceLayerCatalog {
    client: CommerceLayerClient,
    parameters: InstallationParameters,
}

impl CommerceLayerCatalog {
    /// Wire `client` to the installation's parameters.
    #[must_use]
    pub const fn new(client: CommerceLayerClient, parameters: InstallationParameters) -> Self {
        Self { client, parameters }
    }
}

impl ProductCatalog for CommerceLayerCatalog {
    fn fetch_products<'a>(
        &'a self,
        search: &'a str,
        pagination: Pagination,
    ) -> BoxFuture<'a, Result<ProductsPage, PickerError>> {
        Box::pin(
            self.client
                .fetch_product_list(&self.parameters, search, pagination),
        )
    }

    fn fetch_product_previews<'a>(
        &'a self,
        skus: &'a [String],
    ) -> BoxFuture<'a, Result<Vec<Product>, PickerError>> {
        Box::pin(self.client.fetch_products_by_skus(skus, &self.parameters))
    }
}
