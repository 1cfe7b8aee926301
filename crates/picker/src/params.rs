//! Installation parameters supplied by the host configuration screen.
//!
//! The host stores three strings per installation: the integration's client
//! ID and secret and the organization's API endpoint. They are validated at
//! use time, before any request is sent, because the host does not enforce
//! their shape when they are saved.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Required scheme prefix for the API endpoint.
const HTTPS_PREFIX: &str = "https://";

/// Validation failures, reported for the first offending field only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("Missing Client ID")]
    MissingClientId,
    #[error("Missing Client Secret")]
    MissingClientSecret,
    #[error("Missing API Endpoint")]
    MissingApiEndpoint,
    #[error("Invalid API Endpoint: {0}")]
    InvalidApiEndpoint(String),
}

impl ParameterError {
    /// Name of the parameter this error refers to, as the host spells it.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingClientId => "clientId",
            Self::MissingClientSecret => "clientSecret",
            Self::MissingApiEndpoint | Self::InvalidApiEndpoint(_) => "apiEndpoint",
        }
    }
}

/// Installation parameters for one host installation.
///
/// Implements `Debug` manually to redact the client secret.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationParameters {
    /// Integration client ID
    #[serde(default)]
    pub client_id: String,
    /// Integration client secret
    #[serde(default = "empty_secret", deserialize_with = "deserialize_secret")]
    pub client_secret: SecretString,
    /// Organization API endpoint (e.g., <https://my-org.commercelayer.io>)
    #[serde(default)]
    pub api_endpoint: String,
}

impl std::fmt::Debug for InstallationParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallationParameters")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("api_endpoint", &self.api_endpoint)
            .finish()
    }
}

impl InstallationParameters {
    /// Create a parameter set from its three values.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        api_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            api_endpoint: api_endpoint.into(),
        }
    }

    /// Validate these parameters.
    ///
    /// # Errors
    ///
    /// See [`validate_parameters`].
    pub fn validate(&self) -> Result<(), ParameterError> {
        validate_parameters(self)
    }
}

/// Validate installation parameters.
///
/// Fields are checked in a fixed order (client ID, client secret, API
/// endpoint) and the first failure is returned. Blank values count as
/// missing.
///
/// # Errors
///
/// Returns the `ParameterError` for the first missing or malformed field.
pub fn validate_parameters(params: &InstallationParameters) -> Result<(), ParameterError> {
    if params.client_id.trim().is_empty() {
        return Err(ParameterError::MissingClientId);
    }

    if params.client_secret.expose_secret().trim().is_empty() {
        return Err(ParameterError::MissingClientSecret);
    }

    let endpoint = params.api_endpoint.trim();
    if endpoint.is_empty() {
        return Err(ParameterError::MissingApiEndpoint);
    }
    if !endpoint.starts_with(HTTPS_PREFIX) {
        return Err(ParameterError::InvalidApiEndpoint(format!(
            "must start with {HTTPS_PREFIX}"
        )));
    }
    url::Url::parse(endpoint)
        .map_err(|e| ParameterError::InvalidApiEndpoint(e.to_string()))?;

    Ok(())
}

/// Human-readable validation result for the host configuration screen.
///
/// Returns `None` when the parameters are valid.
#[must_use]
pub fn validation_message(params: &InstallationParameters) -> Option<String> {
    validate_parameters(params).err().map(|e| e.to_string())
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}
