use tc_core::paging::Page;
use tc_core::types::DbId;

use super::PageQuery;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::models::CustomerCase;

pub struct CaseApi;

impl CaseApi {
    pub async fn list(gateway: &Gateway, query: &PageQuery) -> ClientResult<Page<CustomerCase>> {
        gateway.get_with("/cases", query).await
    }

    pub async fn save(gateway: &Gateway, case: &CustomerCase) -> ClientResult<bool> {
        gateway.post("/cases", case).await
    }

    pub async fn delete(gateway: &Gateway, id: DbId) -> ClientResult<bool> {
        gateway.delete(&format!("/cases/{id}")).await
    }
}
