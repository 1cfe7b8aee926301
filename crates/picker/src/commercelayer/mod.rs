//! Commerce Layer API client.
//!
//! Provides read-only access to an organization's SKUs for the picker.
//!
//! # API Reference
//!
//! - Base URL: the installation's API endpoint (`https://<org>.commercelayer.io`)
//! - Authentication: client credentials grant at `/oauth/token`, then
//!   `Authorization: Bearer <token>`
//! - Format: JSON:API (`Accept: application/vnd.api+json`)

pub mod auth;
pub mod conversions;
pub mod skus;
pub mod types;

pub use auth::{TokenCache, normalize_endpoint};
pub use conversions::sku_to_product;
pub use skus::{BATCH_SIZE, batch_query, list_query};
pub use types::*;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::error::PickerError;
use crate::params::InstallationParameters;

/// JSON:API media type.
const JSON_API: &str = "application/vnd.api+json";

/// Options for building a [`CommerceLayerClient`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Per-request timeout. Requests wait indefinitely when unset.
    pub timeout: Option<Duration>,
    /// Send requests to this origin instead of the endpoint's own, keeping
    /// the request path. Used for local proxies and mock servers.
    pub origin_override: Option<Url>,
}

/// Commerce Layer API client.
///
/// Cheap to clone; clones share the HTTP connection pool and token cache.
#[derive(Clone)]
pub struct CommerceLayerClient {
    inner: Arc<CommerceLayerClientInner>,
}

struct CommerceLayerClientInner {
    client: reqwest::Client,
    tokens: Arc<TokenCache>,
    origin_override: Option<Url>,
}

impl CommerceLayerClient {
    /// Create a new client sharing `tokens`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(tokens: Arc<TokenCache>, options: ClientOptions) -> Result<Self, PickerError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            inner: Arc::new(CommerceLayerClientInner {
                client,
                tokens,
                origin_override: options.origin_override,
            }),
        })
    }

    /// Get the token cache this client reads from.
    #[must_use]
    pub fn token_cache(&self) -> &Arc<TokenCache> {
        &self.inner.tokens
    }

    /// Get an access token, exchanging credentials only when none is cached.
    ///
    /// The endpoint is normalized to carry an `https://` prefix before the
    /// exchange. See [`TokenCache`] for the behavior of concurrent first use.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::Authentication` if the credentials are rejected.
    /// Returns `PickerError::Http` on network failures.
    #[instrument(skip(self, client_secret))]
    pub async fn get_access_token(
        &self,
        client_id: &str,
        endpoint: &str,
        client_secret: &SecretString,
    ) -> Result<SecretString, PickerError> {
        if let Some(token) = self.inner.tokens.get().await {
            tracing::debug!("Using cached access token");
            return Ok(token);
        }

        let url = self.endpoint_url(&normalize_endpoint(endpoint), auth::TOKEN_PATH)?;
        let token =
            auth::request_integration_token(&self.inner.client, url, client_id, client_secret)
                .await?;

        self.inner.tokens.store(token.clone()).await;
        Ok(token)
    }

    /// Get an access token for an installation.
    pub(crate) async fn access_token_for(
        &self,
        params: &InstallationParameters,
    ) -> Result<SecretString, PickerError> {
        self.get_access_token(&params.client_id, &params.api_endpoint, &params.client_secret)
            .await
    }

    /// Build a request URL from an endpoint and a path with optional query.
    ///
    /// With an origin override, the endpoint's path is kept and its origin
    /// replaced.
    pub(crate) fn endpoint_url(&self, endpoint: &str, path: &str) -> Result<Url, PickerError> {
        let base = match &self.inner.origin_override {
            Some(origin) => {
                let endpoint = Url::parse(endpoint)?;
                format!(
                    "{}{}",
                    origin.as_str().trim_end_matches('/'),
                    endpoint.path()
                )
            }
            None => endpoint.to_string(),
        };

        Ok(Url::parse(&format!("{}{path}", base.trim_end_matches('/')))?)
    }

    /// Execute an authorized JSON:API GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        token: &SecretString,
    ) -> Result<T, PickerError> {
        tracing::debug!(%url, "GET");
        let response = self
            .inner
            .client
            .get(url)
            .header(ACCEPT, JSON_API)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PickerError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| PickerError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    /// Parse error response from the API.
    async fn parse_error(response: reqwest::Response) -> PickerError {
        let status = response.status().as_u16();

        if status == 401 || status == 403 {
            return PickerError::Unauthorized;
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        PickerError::Api { status, message }
    }
}

impl std::fmt::Debug for CommerceLayerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommerceLayerClient")
            .field("origin_override", &self.inner.origin_override)
            .finish_non_exhaustive()
    }
}
