//! Handlers for the `/cases` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use tc_core::error::CoreError;
use tc_core::paging::{offset, Page};
use tc_core::types::DbId;
use tc_db::models::customer_case::{CustomerCase, SaveCustomerCase};
use tc_db::repositories::CustomerCaseRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_text;
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{ok_true, ApiResponse};
use crate::state::AppState;

/// GET /api/cases
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ApiResponse<Page<CustomerCase>>>> {
    let (page, size) = params.resolve();
    let total = CustomerCaseRepo::count(&state.pool).await?;
    let records = CustomerCaseRepo::list_page(&state.pool, size, offset(page, size)).await?;
    Ok(ApiResponse::ok(Page::new(records, total, page, size)))
}

/// POST /api/cases
pub async fn save(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SaveCustomerCase>,
) -> AppResult<Json<ApiResponse<bool>>> {
    require_text("title", &input.title)?;

    match input.id {
        Some(id) => {
            CustomerCaseRepo::update(&state.pool, id, &input)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "CustomerCase",
                    id,
                }))?;
            tracing::info!(user_id = auth.user_id, id, "Customer case updated");
        }
        None => {
            let case = CustomerCaseRepo::create(&state.pool, &input).await?;
            tracing::info!(user_id = auth.user_id, id = case.id, "Customer case created");
        }
    }
    Ok(ok_true())
}

/// DELETE /api/cases/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let deleted = CustomerCaseRepo::delete(&state.pool, id).await?;
    tracing::info!(user_id = auth.user_id, id, deleted, "Customer case delete");
    Ok(ApiResponse::ok(deleted))
}
