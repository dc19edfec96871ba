//! Product model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use tc_core::types::{DbId, Timestamp};

/// A row from the `products` table.
///
/// `category` references a category by name, not by id.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub status: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub specs: Json<BTreeMap<String, String>>,
    pub is_featured: bool,
    pub create_time: Timestamp,
    pub update_time: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProduct {
    pub id: Option<DbId>,
    pub name: String,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub status: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Filters accepted by the product list.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    /// Case-insensitive substring match on name, sku and description.
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub status: Option<String>,
}
