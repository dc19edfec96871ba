use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(blog::profile))
        .route("/posts", get(blog::posts))
        .route("/posts/{id}", get(blog::post))
        .route("/projects", get(blog::projects))
}
