//! Product previews for stored SKU codes.

use super::{CommandError, connect, print_json};

/// Fetch one record per SKU code and print them as JSON.
///
/// # Errors
///
/// Returns `CommandError` if configuration is missing or a request fails.
pub async fn run(skus: &[String]) -> Result<(), CommandError> {
    let (config, client) = connect()?;

    let products = client
        .fetch_products_by_skus(skus, &config.parameters)
        .await?;

    let missing = products.iter().filter(|p| p.is_missing).count();
    tracing::info!(found = products.len() - missing, missing, "Fetched previews");
    print_json(&products)
}
