//! Commerce Layer authentication.
//!
//! Exchanges integration credentials for a bearer token (client credentials
//! grant) and keeps the token in a single-slot [`TokenCache`].

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::PickerError;

/// Path of the token endpoint, relative to the organization endpoint.
pub(crate) const TOKEN_PATH: &str = "/oauth/token";

/// Single-slot cache for the integration's access token.
///
/// The cache is owned by the application context and shared with every
/// client through an `Arc`. Tokens are kept until [`TokenCache::clear`] is
/// called; expiry is not tracked.
///
/// Reading and storing are separate critical sections. Two callers that both
/// find the slot empty will each run the credential exchange, and the later
/// store overwrites the earlier one. Tokens issued for the same credentials
/// are interchangeable, so the overwrite is harmless.
#[derive(Default)]
pub struct TokenCache {
    slot: RwLock<Option<SecretString>>,
}

impl TokenCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached token, if one has been stored.
    pub async fn get(&self) -> Option<SecretString> {
        self.slot.read().await.clone()
    }

    /// Store a token, replacing any cached one.
    pub async fn store(&self, token: SecretString) {
        *self.slot.write().await = Some(token);
    }

    /// Drop the cached token so the next request re-authenticates.
    pub async fn clear(&self) {
        *self.slot.write().await = None;
    }

    /// Check whether a token is cached.
    pub async fn is_populated(&self) -> bool {
        self.slot.read().await.is_some()
    }
}

impl std::fmt::Debug for TokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCache")
            .field("slot", &"[REDACTED]")
            .finish()
    }
}

/// Request body for the client credentials grant.
#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Response from the token endpoint.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
}

/// Normalize an organization endpoint for the auth call.
///
/// Strips any `http://` or `https://` scheme and trailing slashes, then
/// prefixes `https://`, so `acme.commercelayer.io` and
/// `https://acme.commercelayer.io/` both become `https://acme.commercelayer.io`.
#[must_use]
pub fn normalize_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim();
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed)
        .trim_end_matches('/');
    format!("https://{host}")
}

/// Exchange integration credentials for an access token.
///
/// # Errors
///
/// Returns `PickerError::Authentication` if the endpoint rejects the
/// credentials, or `PickerError::Http` on network failures.
#[instrument(skip(client, url, client_secret), fields(token_url = %url))]
pub(crate) async fn request_integration_token(
    client: &reqwest::Client,
    url: url::Url,
    client_id: &str,
    client_secret: &SecretString,
) -> Result<SecretString, PickerError> {
    let response = client
        .post(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .json(&TokenRequest {
            grant_type: "client_credentials",
            client_id,
            client_secret: client_secret.expose_secret(),
        })
        .send()
        .await?;

    let status = response.status();

    if status.is_success() {
        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| PickerError::Parse(format!("Failed to parse token response: {e}")))?;

        tracing::info!(
            token_type = token.token_type.as_deref().unwrap_or("bearer"),
            "Obtained Commerce Layer access token"
        );
        Ok(SecretString::from(token.access_token))
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(PickerError::Authentication(format!(
            "HTTP {status}: {error_text}"
        )))
    }
}
