use axum::routing::get;
use axum::Router;

use crate::handlers::visit_logs;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(visit_logs::list))
        .route("/stats/geo", get(visit_logs::geo_stats))
        .route("/stats/trend", get(visit_logs::trend_stats))
}
