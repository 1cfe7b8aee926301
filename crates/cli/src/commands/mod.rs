//! CLI command implementations.

pub mod previews;
pub mod search;
pub mod validate;

use std::sync::Arc;

use sku_picker::PickerError;
use sku_picker::commercelayer::{CommerceLayerClient, TokenCache};
use sku_picker::config::{ConfigError, PickerConfig};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The adapter failed.
    #[error(transparent)]
    Picker(#[from] PickerError),

    /// Output could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load configuration and build a client with a fresh token cache.
fn connect() -> Result<(PickerConfig, CommerceLayerClient), CommandError> {
    let config = PickerConfig::from_env()?;
    let client = CommerceLayerClient::new(Arc::new(TokenCache::new()), config.client_options())?;
    Ok((config, client))
}

/// Write a value to stdout as pretty JSON.
#[allow(clippy::print_stdout)]
fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
