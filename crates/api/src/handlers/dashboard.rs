//! Handlers for `/dashboard`.

use axum::extract::State;
use axum::Json;
use tc_db::models::dashboard::DashboardStats;
use tc_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/dashboard/stats
pub async fn stats(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DashboardStats>>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(ApiResponse::ok(stats))
}
