use tc_core::content::SECTION_SYSTEM_CONFIG;

use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::models::ContentItem;

pub struct ContentApi;

impl ContentApi {
    pub async fn list_all(gateway: &Gateway) -> ClientResult<Vec<ContentItem>> {
        gateway.get("/content/all").await
    }

    pub async fn list_by_section(gateway: &Gateway, section: &str) -> ClientResult<Vec<ContentItem>> {
        gateway.get(&format!("/content/{section}")).await
    }

    pub async fn system_config(gateway: &Gateway) -> ClientResult<Vec<ContentItem>> {
        Self::list_by_section(gateway, SECTION_SYSTEM_CONFIG).await
    }

    /// Create (no `id`) or replace an item.
    pub async fn save(gateway: &Gateway, item: &ContentItem) -> ClientResult<bool> {
        gateway.post("/content", item).await
    }
}
