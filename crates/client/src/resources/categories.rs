use tc_core::types::DbId;

use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::models::Category;

pub struct CategoryApi;

impl CategoryApi {
    pub async fn list(gateway: &Gateway) -> ClientResult<Vec<Category>> {
        gateway.get("/categories").await
    }

    pub async fn save(gateway: &Gateway, category: &Category) -> ClientResult<bool> {
        gateway.post("/categories", category).await
    }

    pub async fn delete(gateway: &Gateway, id: DbId) -> ClientResult<bool> {
        gateway.delete(&format!("/categories/{id}")).await
    }
}
