//! Pagination types for the picker's product listing.

use serde::{Deserialize, Serialize};

/// Number of products the picker shows per page.
pub const PAGE_SIZE: u32 = 20;

/// Pagination cursor supplied by the host picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Zero-based index of the first product on the requested page.
    pub offset: u32,
}

impl Pagination {
    /// Create a cursor starting at `offset`.
    #[must_use]
    pub const fn new(offset: u32) -> Self {
        Self { offset }
    }

    /// One-based page number for this cursor.
    ///
    /// Offsets that fall inside a page round down to that page.
    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.offset / PAGE_SIZE + 1
    }
}

/// Pagination metadata returned to the host alongside a page of products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Products per page.
    pub count: u32,
    /// Maximum products per page (always equal to `count`).
    pub limit: u32,
    /// Total matching products reported by the backend.
    pub total: u64,
    /// Offset echoed back from the request.
    pub offset: u32,
}

impl PaginationInfo {
    /// Build the metadata for a page starting at `pagination` out of `total`.
    #[must_use]
    pub const fn new(pagination: Pagination, total: u64) -> Self {
        Self {
            count: PAGE_SIZE,
            limit: PAGE_SIZE,
            total,
            offset: pagination.offset,
        }
    }
}
