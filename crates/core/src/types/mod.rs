//! Core types for the SKU picker.
//!
//! This module provides the records exchanged with the host picker widget.

pub mod field;
pub mod pagination;
pub mod product;

pub use field::FieldType;
pub use pagination::{PAGE_SIZE, Pagination, PaginationInfo};
pub use product::{Product, ProductsPage};
