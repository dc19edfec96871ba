use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list).post(categories::save))
        .route("/{id}", delete(categories::delete))
}
