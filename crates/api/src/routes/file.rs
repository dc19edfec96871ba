use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::file;
use crate::state::AppState;

/// ```text
/// POST /upload                -> upload (multipart, body capped at `max_upload_bytes`)
/// GET  /download/{filename}   -> download
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(file::upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/download/{filename}", get(file::download))
}
