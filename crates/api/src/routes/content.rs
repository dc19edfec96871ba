use axum::routing::{get, post};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// ```text
/// GET  /all        -> list_all
/// GET  /{section}  -> list_by_section
/// POST /           -> save (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(content::save))
        .route("/all", get(content::list_all))
        .route("/{section}", get(content::list_by_section))
}
