//! Handlers for the admin `/inquiries` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use tc_core::error::CoreError;
use tc_core::inquiry::InquiryStatus;
use tc_core::paging::{offset, Page};
use tc_core::types::DbId;
use tc_db::models::inquiry::{Inquiry, SaveInquiry};
use tc_db::repositories::InquiryRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_text;
use crate::middleware::auth::AuthUser;
use crate::query::{non_blank, InquiryListParams};
use crate::response::{ok_true, ApiResponse};
use crate::state::AppState;

/// GET /api/inquiries
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<InquiryListParams>,
) -> AppResult<Json<ApiResponse<Page<Inquiry>>>> {
    let status = non_blank(&params.status)
        .map(|s| InquiryStatus::parse(&s))
        .transpose()?;
    let page = tc_core::paging::clamp_page(params.page);
    let size = tc_core::paging::clamp_size(params.size);

    let total = InquiryRepo::count(&state.pool, status).await?;
    let records = InquiryRepo::list_page(&state.pool, status, size, offset(page, size)).await?;
    Ok(ApiResponse::ok(Page::new(records, total, page, size)))
}

/// POST /api/inquiries
///
/// Usually flips `status` between `unread` and `read`. A missing status
/// keeps `unread` on create and the stored status on update.
pub async fn save(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SaveInquiry>,
) -> AppResult<Json<ApiResponse<bool>>> {
    require_text("name", &input.name)?;
    require_text("phone", &input.phone)?;
    require_text("content", &input.content)?;
    let requested = non_blank(&input.status)
        .map(|s| InquiryStatus::parse(&s))
        .transpose()?;

    match input.id {
        Some(id) => {
            let existing = InquiryRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Inquiry",
                    id,
                }))?;
            let status = match requested {
                Some(status) => status,
                None => InquiryStatus::parse(&existing.status)?,
            };
            InquiryRepo::update(&state.pool, id, &input, status).await?;
            tracing::info!(user_id = auth.user_id, id, status = %status, "Inquiry updated");
        }
        None => {
            let status = requested.unwrap_or_default();
            let inquiry = InquiryRepo::create_full(&state.pool, &input, status).await?;
            tracing::info!(user_id = auth.user_id, id = inquiry.id, "Inquiry created");
        }
    }
    Ok(ok_true())
}

/// DELETE /api/inquiries/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let deleted = InquiryRepo::delete(&state.pool, id).await?;
    tracing::info!(user_id = auth.user_id, id, deleted, "Inquiry delete");
    Ok(ApiResponse::ok(deleted))
}

/// GET /api/inquiries/unread-count
pub async fn unread_count(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<i64>>> {
    let count = InquiryRepo::count(&state.pool, Some(InquiryStatus::Unread)).await?;
    Ok(ApiResponse::ok(count))
}
