//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::Json;
use tc_core::catalog::normalize_category_name;
use tc_core::error::CoreError;
use tc_core::types::DbId;
use tc_db::models::category::{Category, SaveCategory};
use tc_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_text;
use crate::middleware::auth::AuthUser;
use crate::response::{ok_true, ApiResponse};
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(ApiResponse::ok(categories))
}

/// POST /api/categories
pub async fn save(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<SaveCategory>,
) -> AppResult<Json<ApiResponse<bool>>> {
    require_text("name", &input.name)?;
    input.name = normalize_category_name(&input.name);

    match input.id {
        Some(id) => {
            CategoryRepo::update(&state.pool, id, &input)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Category",
                    id,
                }))?;
            tracing::info!(user_id = auth.user_id, id, "Category updated");
        }
        None => {
            let category = CategoryRepo::create(&state.pool, &input).await?;
            tracing::info!(user_id = auth.user_id, id = category.id, name = %category.name, "Category created");
        }
    }
    Ok(ok_true())
}

/// DELETE /api/categories/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    tracing::info!(user_id = auth.user_id, id, deleted, "Category delete");
    Ok(ApiResponse::ok(deleted))
}
