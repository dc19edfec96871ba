//! Handlers for the read-only `/blog` data.

use axum::extract::Path;
use axum::Json;
use tc_core::blog::{self, BlogPost, BlogProfile, BlogProject};
use tc_core::error::CoreError;
use tc_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;

/// GET /api/blog/profile
pub async fn profile() -> Json<ApiResponse<&'static BlogProfile>> {
    ApiResponse::ok(blog::profile())
}

/// GET /api/blog/posts
pub async fn posts() -> Json<ApiResponse<Vec<&'static BlogPost>>> {
    ApiResponse::ok(blog::posts())
}

/// GET /api/blog/posts/{id}
pub async fn post(Path(id): Path<DbId>) -> AppResult<Json<ApiResponse<&'static BlogPost>>> {
    blog::post(id)
        .map(ApiResponse::ok)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))
}

/// GET /api/blog/projects
pub async fn projects() -> Json<ApiResponse<&'static [BlogProject]>> {
    ApiResponse::ok(blog::projects())
}
