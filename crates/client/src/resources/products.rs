use serde::Serialize;
use tc_core::paging::Page;
use tc_core::types::DbId;

use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::models::Product;

/// Filters for the product list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

pub struct ProductApi;

impl ProductApi {
    pub async fn list(gateway: &Gateway, query: &ProductQuery) -> ClientResult<Page<Product>> {
        gateway.get_with("/products", query).await
    }

    pub async fn get(gateway: &Gateway, id: DbId) -> ClientResult<Product> {
        gateway.get(&format!("/products/{id}")).await
    }

    pub async fn save(gateway: &Gateway, product: &Product) -> ClientResult<bool> {
        gateway.post("/products", product).await
    }

    pub async fn delete(gateway: &Gateway, id: DbId) -> ClientResult<bool> {
        gateway.delete(&format!("/products/{id}")).await
    }
}
