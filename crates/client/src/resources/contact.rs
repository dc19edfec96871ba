use tc_core::inquiry::ContactForm;
use tc_core::paging::Page;

use super::PageQuery;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::models::Inquiry;

pub struct ContactApi;

impl ContactApi {
    /// Submit the public contact form. Callers validate first.
    pub async fn submit(gateway: &Gateway, form: &ContactForm) -> ClientResult<bool> {
        gateway.post("/contact", form).await
    }

    /// Admin listing of submissions.
    pub async fn list(gateway: &Gateway, query: &PageQuery) -> ClientResult<Page<Inquiry>> {
        gateway.get_with("/contact", query).await
    }
}
