//! SKU fetch operations for the picker.

use std::collections::HashSet;
use std::fmt::Write;

use futures::future::try_join_all;
use secrecy::SecretString;
use sku_picker_core::{PAGE_SIZE, Pagination, PaginationInfo, Product, ProductsPage};
use tracing::instrument;

use super::conversions::sku_to_product;
use super::types::SkuListResponse;
use super::CommerceLayerClient;
use crate::error::PickerError;
use crate::params::{InstallationParameters, validate_parameters};

/// Most SKUs the API returns for one `code_in` filter.
pub const BATCH_SIZE: usize = 25;

/// SKU collection path.
const SKUS_PATH: &str = "/api/skus";

/// Build the query string for one page of the SKU listing.
///
/// The name-or-code filter is only added for a non-empty search.
#[must_use]
pub fn list_query(search: &str, pagination: Pagination) -> String {
    let mut query = format!(
        "page[size]={PAGE_SIZE}&page[number]={}",
        pagination.page_number()
    );
    if !search.is_empty() {
        let _ = write!(
            query,
            "&filter[q][name_or_code_cont]={}",
            urlencoding::encode(search)
        );
    }
    query
}

/// Build the query string fetching one chunk of SKUs by code.
#[must_use]
pub fn batch_query(codes: &[String]) -> String {
    let codes = codes
        .iter()
        .map(|code| urlencoding::encode(code).into_owned())
        .collect::<Vec<_>>()
        .join(",");
    format!("page[size]={BATCH_SIZE}&filter[q][code_in]={codes}")
}

/// Append a placeholder for every requested SKU missing from `found`.
///
/// Found products keep their order; placeholders follow in request order.
fn append_missing(requested: &[String], mut found: Vec<Product>) -> Vec<Product> {
    let found_skus: HashSet<&str> = found.iter().map(|p| p.sku.as_str()).collect();
    let missing: Vec<Product> = requested
        .iter()
        .filter(|sku| !found_skus.contains(sku.as_str()))
        .map(|sku| Product::missing(sku.as_str()))
        .collect();

    if !missing.is_empty() {
        tracing::warn!(
            missing = missing.len(),
            requested = requested.len(),
            "SKUs not returned by Commerce Layer"
        );
    }

    found.extend(missing);
    found
}

impl CommerceLayerClient {
    /// Fetch one page of SKUs, optionally filtered by name or code.
    ///
    /// Returns the decoded JSON:API body; `meta.record_count` holds the total
    /// number of matches.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::InvalidParameters` before any request if the
    /// parameters are invalid. Returns other `PickerError` variants if
    /// authentication or the request fails.
    #[instrument(skip(self, params), fields(page = pagination.page_number()))]
    pub async fn fetch_skus(
        &self,
        params: &InstallationParameters,
        search: &str,
        pagination: Pagination,
    ) -> Result<SkuListResponse, PickerError> {
        validate_parameters(params)?;

        let path = format!("{SKUS_PATH}?{}", list_query(search, pagination));
        let url = self.endpoint_url(&params.api_endpoint, &path)?;
        let token = self.access_token_for(params).await?;

        self.get(url, &token).await
    }

    /// Fetch one page of products in the shape the host picker expects.
    ///
    /// # Errors
    ///
    /// See [`CommerceLayerClient::fetch_skus`].
    pub async fn fetch_product_list(
        &self,
        params: &InstallationParameters,
        search: &str,
        pagination: Pagination,
    ) -> Result<ProductsPage, PickerError> {
        let response = self.fetch_skus(params, search, pagination).await?;

        Ok(ProductsPage {
            pagination: PaginationInfo::new(pagination, response.meta.record_count),
            products: response.data.into_iter().map(sku_to_product).collect(),
        })
    }

    /// Fetch products for a list of SKU codes.
    ///
    /// Codes are requested in chunks of [`BATCH_SIZE`], all chunks at once.
    /// The result has one record per requested code: products the API
    /// returned, in chunk order and then API order, followed by a
    /// placeholder for each code it did not return, in request order.
    ///
    /// An empty list returns immediately without validating parameters or
    /// touching the network.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::InvalidParameters` before any request if the
    /// parameters are invalid. Returns the first failure among the chunk
    /// requests otherwise.
    #[instrument(skip(self, skus, params), fields(sku_count = skus.len()))]
    pub async fn fetch_products_by_skus(
        &self,
        skus: &[String],
        params: &InstallationParameters,
    ) -> Result<Vec<Product>, PickerError> {
        if skus.is_empty() {
            return Ok(Vec::new());
        }

        validate_parameters(params)?;
        let token = self.access_token_for(params).await?;

        let requests = skus
            .chunks(BATCH_SIZE)
            .map(|chunk| self.fetch_sku_chunk(params, chunk, &token));
        let responses = try_join_all(requests).await?;

        let found: Vec<Product> = responses
            .into_iter()
            .flat_map(|response| response.data)
            .map(sku_to_product)
            .collect();

        Ok(append_missing(skus, found))
    }

    async fn fetch_sku_chunk(
        &self,
        params: &InstallationParameters,
        codes: &[String],
        token: &SecretString,
    ) -> Result<SkuListResponse, PickerError> {
        let path = format!("{SKUS_PATH}?{}", batch_query(codes));
        let url = self.endpoint_url(&params.api_endpoint, &path)?;
        self.get(url, token).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::super::{ClientOptions, TokenCache};
    use super::*;

    fn query_value(query: &str, key: &str) -> Option<String> {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    fn product(sku: &str) -> Product {
        Product {
            id: format!("id-{sku}"),
            sku: sku.to_string(),
            name: format!("Product {sku}"),
            image: String::new(),
            is_missing: false,
        }
    }

    #[test]
    fn test_list_query_without_search() {
        let query = list_query("", Pagination::new(0));
        assert_eq!(query, "page[size]=20&page[number]=1");
        assert!(!query.contains("filter[q][name_or_code_cont]"));
    }

    #[test]
    fn test_list_query_with_search() {
        let query = list_query("shirt", Pagination::new(40));
        assert_eq!(
            query,
            "page[size]=20&page[number]=3&filter[q][name_or_code_cont]=shirt"
        );
    }

    #[test]
    fn test_list_query_encodes_search() {
        let query = list_query("baby's onesie", Pagination::new(20));
        assert_eq!(query_value(&query, "page[number]").as_deref(), Some("2"));
        assert_eq!(
            query_value(&query, "filter[q][name_or_code_cont]").as_deref(),
            Some("baby's onesie")
        );
    }

    #[test]
    fn test_batch_query() {
        let codes = vec!["CAP-01".to_string(), "MUG-02".to_string()];
        let query = batch_query(&codes);
        assert_eq!(query, "page[size]=25&filter[q][code_in]=CAP-01,MUG-02");
    }

    #[test]
    fn test_append_missing_keeps_found_order() {
        let requested: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| (*s).to_string()).collect();
        let found = vec![product("c"), product("a")];

        let result = append_missing(&requested, found);
        let skus: Vec<&str> = result.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, ["c", "a", "b", "d"]);

        assert!(!result.first().unwrap().is_missing);
        let missing: Vec<&Product> = result.iter().filter(|p| p.is_missing).collect();
        assert_eq!(missing.len(), 2);
        assert!(missing.iter().all(|p| p.id.is_empty() && p.name.is_empty()));
    }

    #[test]
    fn test_append_missing_all_found() {
        let requested = vec!["a".to_string()];
        let result = append_missing(&requested, vec![product("a")]);
        assert_eq!(result, vec![product("a")]);
    }

    #[tokio::test]
    async fn test_empty_sku_list_skips_network_and_validation() {
        let client =
            CommerceLayerClient::new(Arc::new(TokenCache::new()), ClientOptions::default()).unwrap();
        let params = InstallationParameters::new("", "", "");

        let products = client.fetch_products_by_skus(&[], &params).await.unwrap();
        assert!(products.is_empty());
        assert!(!client.token_cache().is_populated().await);
    }

    #[tokio::test]
    async fn test_invalid_parameters_fail_before_request() {
        let client =
            CommerceLayerClient::new(Arc::new(TokenCache::new()), ClientOptions::default()).unwrap();
        let params = InstallationParameters::new("client-id", "", "https://acme.commercelayer.io");

        let err = client
            .fetch_skus(&params, "", Pagination::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing Client Secret");

        let err = client
            .fetch_products_by_skus(&["CAP-01".to_string()], &params)
            .await
            .unwrap_err();
        assert!(matches!(err, PickerError::InvalidParameters(_)));
    }
}
