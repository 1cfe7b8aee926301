//! SKU Picker - Commerce Layer product picker for a headless CMS.
//!
//! Lets editors pick SKUs from a Commerce Layer organization and store their
//! codes in content entries. The crate is the adapter between the commerce
//! API and a host-provided picker widget:
//!
//! - [`params`] - Installation parameters and their validation
//! - [`commercelayer`] - API client, token cache, and SKU fetchers
//! - [`catalog`] - The callback surface handed to the host picker
//! - [`dialog`] - Dialog rendering and the modal open/close round trip
//! - [`config`] - Environment-based configuration for running outside the host
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), sku_picker::PickerError> {
//! use std::sync::Arc;
//!
//! use sku_picker::commercelayer::{ClientOptions, CommerceLayerClient, TokenCache};
//! use sku_picker::{InstallationParameters, Pagination};
//!
//! let tokens = Arc::new(TokenCache::new());
//! let client = CommerceLayerClient::new(tokens, ClientOptions::default())?;
//! let params = InstallationParameters::new("id", "secret", "https://acme.commercelayer.io");
//!
//! let page = client.fetch_product_list(&params, "shirt", Pagination::new(0)).await?;
//! let previews = client
//!     .fetch_products_by_skus(&["TSHIRTMM000000FFFFFFXLXX".to_string()], &params)
//!     .await?;
//! # let _ = (page, previews);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod commercelayer;
pub mod config;
pub mod dialog;
pub mod error;
pub mod params;

pub use catalog::{CommerceLayerCatalog, ProductCatalog};
pub use error::{HostError, PickerError};
pub use params::{InstallationParameters, ParameterError, validate_parameters, validation_message};
pub use sku_picker_core::{FieldType, PAGE_SIZE, Pagination, PaginationInfo, Product, ProductsPage};
