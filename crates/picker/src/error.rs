//! Error types for the SKU picker adapter.

use thiserror::Error;

use crate::params::ParameterError;

/// Errors returned by the commerce client, fetchers, and dialog controller.
#[derive(Debug, Error)]
pub enum PickerError {
    /// Installation parameters failed validation; no request was sent.
    #[error(transparent)]
    InvalidParameters(#[from] ParameterError),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The credential exchange was rejected.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The API rejected the bearer token.
    #[error("Unauthorized: access token rejected")]
    Unauthorized,

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A request URL could not be built from the configured endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The host runtime reported a failure.
    #[error("Host error: {0}")]
    Host(#[from] HostError),
}

/// Failures reported by the host runtime the dialog is rendered into.
#[derive(Debug, Error)]
pub enum HostError {
    /// The dialog container element does not exist.
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    /// The host picker widget failed to render.
    #[error("Render failed: {0}")]
    Render(String),

    /// The host modal could not be opened.
    #[error("Dialog failed: {0}")]
    Dialog(String),
}
