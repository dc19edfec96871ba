//! Inquiry desk: review, mark and delete customer inquiries.

use tc_core::inquiry::InquiryStatus;
use tc_core::types::DbId;

use crate::context::AdminContext;
use crate::error::{ClientError, ClientResult};
use crate::models::Inquiry;
use crate::resources::inquiries::InquiryQuery;
use crate::resources::InquiryApi;

pub const INQUIRY_LIST_SIZE: i64 = 100;

pub struct InquiryDesk {
    ctx: AdminContext,
    inquiries: Vec<Inquiry>,
}

impl InquiryDesk {
    pub fn new(ctx: AdminContext) -> Self {
        Self {
            ctx,
            inquiries: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> ClientResult<()> {
        let query = InquiryQuery {
            size: Some(INQUIRY_LIST_SIZE),
            ..InquiryQuery::default()
        };
        match InquiryApi::list(&self.ctx.gateway, &query).await {
            Ok(page) => {
                self.inquiries = page.records;
                Ok(())
            }
            Err(e) => {
                self.ctx.notifier.error(&format!("Failed to load inquiries: {e}"));
                Err(e)
            }
        }
    }

    pub fn inquiries(&self) -> &[Inquiry] {
        &self.inquiries
    }

    pub fn unread(&self) -> usize {
        self.inquiries
            .iter()
            .filter(|i| i.status == InquiryStatus::Unread)
            .count()
    }

    pub async fn set_status(&mut self, id: DbId, status: InquiryStatus) -> ClientResult<()> {
        let Some(mut inquiry) = self.inquiries.iter().find(|i| i.id == id).cloned() else {
            return Err(ClientError::Validation(format!("Inquiry {id} is not loaded")));
        };
        inquiry.status = status;
        if let Err(e) = InquiryApi::save(&self.ctx.gateway, &inquiry).await {
            self.ctx.notifier.error(&format!("Update failed: {e}"));
            return Err(e);
        }
        tracing::info!(id, status = %status, "Inquiry status changed");
        self.refresh().await
    }

    /// Flip between read and unread. A processed inquiry becomes unread.
    pub async fn toggle_read(&mut self, id: DbId) -> ClientResult<()> {
        let current = self
            .inquiries
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.status)
            .ok_or_else(|| ClientError::Validation(format!("Inquiry {id} is not loaded")))?;
        let next = match current {
            InquiryStatus::Unread => InquiryStatus::Read,
            InquiryStatus::Read | InquiryStatus::Processed => InquiryStatus::Unread,
        };
        self.set_status(id, next).await
    }

    /// Delete after confirmation. Returns `false` when cancelled.
    pub async fn delete(&mut self, id: DbId) -> ClientResult<bool> {
        if !self.ctx.confirm.confirm("Delete this inquiry?").await {
            return Ok(false);
        }
        if let Err(e) = InquiryApi::delete(&self.ctx.gateway, id).await {
            self.ctx.notifier.error(&format!("Delete failed: {e}"));
            return Err(e);
        }
        tracing::info!(id, "Inquiry deleted");
        self.ctx.notifier.success("Deleted");
        self.refresh().await?;
        Ok(true)
    }
}
