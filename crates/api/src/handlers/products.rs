//! Handlers for the `/products` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use tc_core::catalog::normalize_category_name;
use tc_core::error::CoreError;
use tc_core::paging::{offset, Page};
use tc_core::types::DbId;
use tc_db::models::product::{Product, ProductFilter, SaveProduct};
use tc_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_text;
use crate::middleware::auth::AuthUser;
use crate::query::{non_blank, PageParams, ProductListParams};
use crate::response::{ok_true, ApiResponse};
use crate::state::AppState;

/// GET /api/products
///
/// Newest first. `category`, `status` match exactly; `search` is a
/// case-insensitive substring match.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<Json<ApiResponse<Page<Product>>>> {
    let (page, size) = PageParams {
        page: params.page,
        size: params.size,
    }
    .resolve();

    let filter = ProductFilter {
        category: non_blank(&params.category),
        search: non_blank(&params.search),
        featured: params.featured,
        status: non_blank(&params.status),
    };

    let total = ProductRepo::count(&state.pool, &filter).await?;
    let records = ProductRepo::list_page(&state.pool, &filter, size, offset(page, size)).await?;
    Ok(ApiResponse::ok(Page::new(records, total, page, size)))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(ApiResponse::ok(product))
}

/// POST /api/products
pub async fn save(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<SaveProduct>,
) -> AppResult<Json<ApiResponse<bool>>> {
    require_text("name", &input.name)?;
    if input.price.is_some_and(|p| !p.is_finite() || p < 0.0) {
        return Err(AppError::Core(CoreError::Validation(
            "price must be a non-negative number".into(),
        )));
    }
    input.category = input
        .category
        .as_deref()
        .map(normalize_category_name)
        .filter(|c| !c.is_empty());

    match input.id {
        Some(id) => {
            ProductRepo::update(&state.pool, id, &input)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Product",
                    id,
                }))?;
            tracing::info!(user_id = auth.user_id, id, "Product updated");
        }
        None => {
            let product = ProductRepo::create(&state.pool, &input).await?;
            tracing::info!(user_id = auth.user_id, id = product.id, "Product created");
        }
    }
    Ok(ok_true())
}

/// DELETE /api/products/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    tracing::info!(user_id = auth.user_id, id, deleted, "Product delete");
    Ok(ApiResponse::ok(deleted))
}
