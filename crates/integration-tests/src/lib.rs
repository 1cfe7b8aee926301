//! Integration tests for the SKU picker.
//!
//! Tests run the real client against a `wiremock` server standing in for a
//! Commerce Layer organization. The client reaches it through
//! `ClientOptions::origin_override`, so installation parameters keep a valid
//! `https://` endpoint.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sku-picker-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use serde_json::{Value, json};
use sku_picker::InstallationParameters;
use sku_picker::commercelayer::{ClientOptions, CommerceLayerClient, TokenCache};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

/// Endpoint configured in test installations.
pub const TEST_ENDPOINT: &str = "https://acme.commercelayer.io";

/// Access token issued by the mock token endpoint.
pub const TEST_TOKEN: &str = "test-access-token";

/// Installation parameters pointing at [`TEST_ENDPOINT`].
#[must_use]
pub fn test_parameters() -> InstallationParameters {
    InstallationParameters::new("test-client-id", "test-client-secret", TEST_ENDPOINT)
}

/// Build a client routed to `server` with a fresh token cache.
///
/// # Panics
///
/// Panics if the mock server URI cannot be parsed or the client cannot be built.
#[must_use]
pub fn test_client(server: &MockServer) -> CommerceLayerClient {
    test_client_with_cache(server, Arc::new(TokenCache::new()))
}

/// Build a client routed to `server` sharing `tokens`.
///
/// # Panics
///
/// Panics if the mock server URI cannot be parsed or the client cannot be built.
#[must_use]
pub fn test_client_with_cache(server: &MockServer, tokens: Arc<TokenCache>) -> CommerceLayerClient {
    let origin = url::Url::parse(&server.uri()).expect("mock server URI is a valid URL");
    CommerceLayerClient::new(
        tokens,
        ClientOptions {
            timeout: None,
            origin_override: Some(origin),
        },
    )
    .expect("Failed to create Commerce Layer client")
}

/// Mount a token endpoint that must be called `times` times.
pub async fn mount_token_endpoint(server: &MockServer, times: impl Into<Times>) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_partial_json(json!({
            "grant_type": "client_credentials",
            "client_id": "test-client-id",
            "client_secret": "test-client-secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TEST_TOKEN,
            "token_type": "bearer",
            "expires_in": 14400,
            "scope": "market:all",
            "created_at": 1_700_000_000
        })))
        .expect(times)
        .mount(server)
        .await;
}

/// JSON:API SKU resource for `code`.
#[must_use]
pub fn sku_resource(code: &str) -> Value {
    json!({
        "id": format!("id-{code}"),
        "type": "skus",
        "attributes": {
            "code": code,
            "name": format!("Product {code}"),
            "image_url": format!("https://img.example.com/{code}.png")
        }
    })
}

/// JSON:API list body for `codes` with `record_count` total matches.
#[must_use]
pub fn sku_list(codes: &[&str], record_count: u64) -> Value {
    json!({
        "data": codes.iter().map(|code| sku_resource(code)).collect::<Vec<_>>(),
        "meta": { "record_count": record_count, "page_count": record_count.div_ceil(20) }
    })
}
