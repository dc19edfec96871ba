use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::inquiries;
use crate::state::AppState;

/// All routes require auth.
///
/// ```text
/// GET    /               -> list (?page, size, status)
/// POST   /               -> save
/// GET    /unread-count   -> unread_count
/// DELETE /{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inquiries::list).post(inquiries::save))
        .route("/unread-count", get(inquiries::unread_count))
        .route("/{id}", delete(inquiries::delete))
}
