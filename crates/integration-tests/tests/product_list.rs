//! Integration tests for the paged product listing.

#![allow(clippy::unwrap_used)]

use sku_picker::{InstallationParameters, Pagination, PickerError};
use sku_picker_integration_tests::{
    TEST_TOKEN, mount_token_endpoint, sku_list, test_client, test_parameters,
};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_FILTER: &str = "filter[q][name_or_code_cont]";

#[tokio::test]
async fn test_search_page_is_filtered_and_paginated() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1_u64).await;
    Mock::given(method("GET"))
        .and(path("/api/skus"))
        .and(query_param("page[size]", "20"))
        .and(query_param("page[number]", "3"))
        .and(query_param(SEARCH_FILTER, "shirt"))
        .and(header("Accept", "application/vnd.api+json"))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(sku_list(&["SHIRT-S", "SHIRT-M"], 42)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client
        .fetch_product_list(&test_parameters(), "shirt", Pagination::new(40))
        .await
        .unwrap();

    assert_eq!(page.pagination.count, 20);
    assert_eq!(page.pagination.limit, 20);
    assert_eq!(page.pagination.total, 42);
    assert_eq!(page.pagination.offset, 40);

    let skus: Vec<&str> = page.products.iter().map(|p| p.sku.as_str()).collect();
    assert_eq!(skus, ["SHIRT-S", "SHIRT-M"]);

    let first = page.products.first().unwrap();
    assert_eq!(first.id, "id-SHIRT-S");
    assert_eq!(first.name, "Product SHIRT-S");
    assert_eq!(first.image, "https://img.example.com/SHIRT-S.png");
    assert!(!first.is_missing);

    let requests = server.received_requests().await.unwrap();
    let listing = requests
        .iter()
        .find(|r| r.url.path() == "/api/skus")
        .unwrap();
    assert!(
        listing
            .url
            .query_pairs()
            .any(|(k, v)| k == SEARCH_FILTER && v == "shirt")
    );
}

#[tokio::test]
async fn test_empty_search_has_no_filter() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1_u64).await;
    Mock::given(method("GET"))
        .and(path("/api/skus"))
        .and(query_param("page[number]", "1"))
        .and(query_param_is_missing(SEARCH_FILTER))
        .respond_with(ResponseTemplate::new(200).set_body_json(sku_list(&["CAP-01"], 1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client
        .fetch_skus(&test_parameters(), "", Pagination::new(0))
        .await
        .unwrap();

    assert_eq!(response.meta.record_count, 1);
    assert_eq!(response.data.len(), 1);
}

#[tokio::test]
async fn test_token_reused_across_pages() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1_u64).await;
    Mock::given(method("GET"))
        .and(path("/api/skus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sku_list(&[], 0)))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let params = test_parameters();
    client
        .fetch_product_list(&params, "", Pagination::new(0))
        .await
        .unwrap();
    client
        .fetch_product_list(&params, "", Pagination::new(20))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_parameters_make_no_requests() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 0_u64).await;

    let client = test_client(&server);
    let params = InstallationParameters::new("test-client-id", "test-client-secret", "http://acme.commercelayer.io");

    let err = client
        .fetch_product_list(&params, "shirt", Pagination::new(0))
        .await
        .unwrap_err();

    assert!(matches!(err, PickerError::InvalidParameters(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_token_is_unauthorized() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1_u64).await;
    Mock::given(method("GET"))
        .and(path("/api/skus"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .fetch_product_list(&test_parameters(), "", Pagination::new(0))
        .await
        .unwrap_err();

    assert!(matches!(err, PickerError::Unauthorized));
}

#[tokio::test]
async fn test_server_error_propagates() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1_u64).await;
    Mock::given(method("GET"))
        .and(path("/api/skus"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .fetch_product_list(&test_parameters(), "", Pagination::new(0))
        .await
        .unwrap_err();

    match err {
        PickerError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}
