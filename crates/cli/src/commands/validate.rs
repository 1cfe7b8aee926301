//! Installation parameter checks.
//!
//! # Usage
//!
//! ```bash
//! # Validate parameters and exchange credentials for a token
//! sku-picker validate
//!
//! # Validate parameters only
//! sku-picker validate --offline
//! ```

use sku_picker::validate_parameters;

use super::{CommandError, connect};

/// Validate the configured parameters, then obtain a token unless `offline`.
///
/// # Errors
///
/// Returns `CommandError::Picker` with the first invalid field, or if the
/// credential exchange fails.
pub async fn run(offline: bool) -> Result<(), CommandError> {
    let (config, client) = connect()?;
    let params = &config.parameters;

    validate_parameters(params).map_err(sku_picker::PickerError::from)?;
    tracing::info!(endpoint = %params.api_endpoint, "Installation parameters are valid");

    if offline {
        return Ok(());
    }

    client
        .get_access_token(&params.client_id, &params.api_endpoint, &params.client_secret)
        .await?;
    tracing::info!("Credentials accepted by Commerce Layer");

    Ok(())
}
