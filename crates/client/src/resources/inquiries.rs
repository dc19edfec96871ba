use serde::Serialize;
use tc_core::inquiry::InquiryStatus;
use tc_core::paging::Page;
use tc_core::types::DbId;

use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::models::Inquiry;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct InquiryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InquiryStatus>,
}

pub struct InquiryApi;

impl InquiryApi {
    pub async fn list(gateway: &Gateway, query: &InquiryQuery) -> ClientResult<Page<Inquiry>> {
        gateway.get_with("/inquiries", query).await
    }

    /// Replace an inquiry, typically to change its status.
    pub async fn save(gateway: &Gateway, inquiry: &Inquiry) -> ClientResult<bool> {
        gateway.post("/inquiries", inquiry).await
    }

    pub async fn delete(gateway: &Gateway, id: DbId) -> ClientResult<bool> {
        gateway.delete(&format!("/inquiries/{id}")).await
    }

    pub async fn unread_count(gateway: &Gateway) -> ClientResult<i64> {
        gateway.get("/inquiries/unread-count").await
    }
}
