//! Query-string parameter types shared by list handlers.

use serde::Deserialize;
use tc_core::paging::{clamp_page, clamp_size};

/// `?page=&size=` pagination. Missing or out-of-range values are clamped,
/// never rejected.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageParams {
    /// Clamped `(page, size)`.
    pub fn resolve(&self) -> (i64, i64) {
        (clamp_page(self.page), clamp_size(self.size))
    }
}

/// Filters for `GET /products`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub status: Option<String>,
}

/// Filters for `GET /inquiries`.
#[derive(Debug, Default, Deserialize)]
pub struct InquiryListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<String>,
}

/// Blank filter strings behave as if the parameter were absent.
pub fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
