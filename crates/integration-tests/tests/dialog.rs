//! Integration tests for the dialog wiring the catalog into the host picker.

#![allow(clippy::unwrap_used)]

use std::future::Future;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use sku_picker::dialog::{
    ContainerLayout, DialogHost, DialogOptions, PickerOptions, open_dialog, render_dialog,
};
use sku_picker::{CommerceLayerCatalog, FieldType, HostError, Pagination};
use sku_picker_integration_tests::{mount_token_endpoint, sku_list, test_client, test_parameters};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Host that keeps the picker options and closes modals with a fixed value.
struct TestHost {
    picker: Mutex<Option<PickerOptions>>,
    modal_result: Value,
}

impl TestHost {
    fn new(modal_result: Value) -> Self {
        Self {
            picker: Mutex::new(None),
            modal_result,
        }
    }

    fn picker(&self) -> PickerOptions {
        self.picker.lock().unwrap().clone().unwrap()
    }
}

impl DialogHost for TestHost {
    fn prepare_container(&self, _container_id: &str, layout: ContainerLayout) -> Result<(), HostError> {
        assert_eq!(layout, ContainerLayout::FlexColumn);
        Ok(())
    }

    fn render_picker(&self, _container_id: &str, options: PickerOptions) -> Result<(), HostError> {
        *self.picker.lock().unwrap() = Some(options);
        Ok(())
    }

    fn start_auto_resizer(&self) {}

    fn open_current_app(
        &self,
        options: DialogOptions,
    ) -> impl Future<Output = Result<Value, HostError>> + Send {
        let result = if options.parameters.validate().is_ok() {
            Ok(self.modal_result.clone())
        } else {
            Err(HostError::Dialog("invalid invocation parameters".to_string()))
        };
        async move { result }
    }
}

#[tokio::test]
async fn test_picker_catalog_reaches_commerce_layer() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1_u64).await;
    Mock::given(method("GET"))
        .and(path("/api/skus"))
        .and(query_param("page[number]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sku_list(&["MUG-02"], 21)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/skus"))
        .and(query_param("filter[q][code_in]", "MUG-02,GONE-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sku_list(&["MUG-02"], 1)))
        .expect(1)
        .mount(&server)
        .await;

    let host = TestHost::new(Value::Null);
    let catalog = CommerceLayerCatalog::new(test_client(&server), test_parameters());
    render_dialog(&host, Arc::new(catalog)).unwrap();

    let picker = host.picker();
    assert_eq!((picker.make_cta_text)(&FieldType::Symbol), "Select a product");

    let page = picker
        .catalog
        .fetch_products("", Pagination::new(20))
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 21);
    assert_eq!(page.pagination.offset, 20);
    assert_eq!(page.products.len(), 1);

    let previews = picker
        .catalog
        .fetch_product_previews(&["MUG-02".to_string(), "GONE-01".to_string()])
        .await
        .unwrap();
    let flags: Vec<(&str, bool)> = previews
        .iter()
        .map(|p| (p.sku.as_str(), p.is_missing))
        .collect();
    assert_eq!(flags, [("MUG-02", false), ("GONE-01", true)]);
}

#[tokio::test]
async fn test_open_dialog_round_trip() {
    let host = TestHost::new(json!(["MUG-02", "CAP-01"]));
    let skus = open_dialog(&host, &test_parameters(), &FieldType::Array)
        .await
        .unwrap();
    assert_eq!(skus, ["MUG-02", "CAP-01"]);

    let dismissed = TestHost::new(Value::Null);
    let skus = open_dialog(&dismissed, &test_parameters(), &FieldType::Array)
        .await
        .unwrap();
    assert!(skus.is_empty());
}
