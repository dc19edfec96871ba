//! Handlers for `/visit-logs` and its aggregates.

use axum::extract::{Query, State};
use axum::Json;
use tc_core::paging::{offset, Page};
use tc_db::models::visit_log::{DailyVisits, GeoStat, VisitLog};
use tc_db::repositories::VisitLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Days covered by the trend chart.
const TREND_DAYS: i32 = 7;

/// GET /api/visit-logs
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ApiResponse<Page<VisitLog>>>> {
    let (page, size) = params.resolve();
    let total = VisitLogRepo::count(&state.pool).await?;
    let records = VisitLogRepo::list_page(&state.pool, size, offset(page, size)).await?;
    Ok(ApiResponse::ok(Page::new(records, total, page, size)))
}

/// GET /api/visit-logs/stats/geo
pub async fn geo_stats(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<GeoStat>>>> {
    Ok(ApiResponse::ok(VisitLogRepo::geo_stats(&state.pool).await?))
}

/// GET /api/visit-logs/stats/trend
pub async fn trend_stats(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<DailyVisits>>>> {
    Ok(ApiResponse::ok(
        VisitLogRepo::daily_trend(&state.pool, TREND_DAYS).await?,
    ))
}
