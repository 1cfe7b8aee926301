//! SKU Picker Core - Shared types library.
//!
//! This crate provides the types shared between the picker adapter and the
//! host-facing surfaces:
//! - `sku-picker` - Commerce API client, fetchers, and dialog controller
//! - `sku-picker-cli` - Command-line tools for exercising the adapter
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. The shapes
//! here are the ones the host picker widget consumes, so their serialized
//! form is part of the host contract.
//!
//! # Modules
//!
//! - [`types`] - Product records, pagination, and host field types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
