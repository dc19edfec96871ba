use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// ```text
/// GET    /       -> list (?page, size, category, search, featured, status)
/// POST   /       -> save (requires auth)
/// GET    /{id}   -> get_by_id
/// DELETE /{id}   -> delete (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::save))
        .route("/{id}", get(products::get_by_id).delete(products::delete))
}
