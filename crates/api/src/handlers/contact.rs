//! Handlers for the public `/contact` form.

use axum::extract::{Query, State};
use axum::Json;
use tc_core::inquiry::ContactForm;
use tc_core::paging::{offset, Page};
use tc_db::models::inquiry::{CreateInquiry, Inquiry};
use tc_db::repositories::InquiryRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{ok_true, ApiResponse};
use crate::state::AppState;

/// POST /api/contact
///
/// Records the submission as an `unread` inquiry.
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let form = form.validated()?;
    let inquiry = InquiryRepo::create(
        &state.pool,
        &CreateInquiry {
            name: form.name,
            phone: form.phone,
            email: form.email,
            content: form.content,
            attachment: form.attachment,
        },
    )
    .await?;
    tracing::info!(id = inquiry.id, "Contact inquiry received");
    Ok(ok_true())
}

/// GET /api/contact
///
/// Same listing as `GET /api/inquiries` without the status filter.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ApiResponse<Page<Inquiry>>>> {
    let (page, size) = params.resolve();
    let total = InquiryRepo::count(&state.pool, None).await?;
    let records = InquiryRepo::list_page(&state.pool, None, size, offset(page, size)).await?;
    Ok(ApiResponse::ok(Page::new(records, total, page, size)))
}
