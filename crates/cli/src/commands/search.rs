//! Product listing, as the picker's search view loads it.

use sku_picker::Pagination;

use super::{CommandError, connect, print_json};

/// Fetch one page of products matching `query` and print it as JSON.
///
/// # Errors
///
/// Returns `CommandError` if configuration is missing or the request fails.
pub async fn run(query: &str, offset: u32) -> Result<(), CommandError> {
    let (config, client) = connect()?;

    let page = client
        .fetch_product_list(&config.parameters, query, Pagination::new(offset))
        .await?;

    tracing::info!(
        total = page.pagination.total,
        returned = page.products.len(),
        "Fetched product page"
    );
    print_json(&page)
}
