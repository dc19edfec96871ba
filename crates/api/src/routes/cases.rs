use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::cases;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cases::list).post(cases::save))
        .route("/{id}", delete(cases::delete))
}
