pub mod auth;
pub mod blog;
pub mod cases;
pub mod categories;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod file;
pub mod health;
pub mod inquiries;
pub mod products;
pub mod visit_logs;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Reads are public except where marked; every mutation requires a token.
///
/// ```text
/// /auth/login                      login (public)
/// /auth/logout                     logout
/// /auth/me                         current user
///
/// /content/all                     every item (public)
/// /content/{section}               items of one section (public)
/// /content                         upsert (POST)
///
/// /categories                      list (public), upsert (POST)
/// /categories/{id}                 delete
///
/// /products                        paged list (public), upsert (POST)
/// /products/{id}                   get (public), delete
///
/// /cases                           paged list (public), upsert (POST)
/// /cases/{id}                      delete
///
/// /contact                         submit (public POST), paged list (GET)
///
/// /inquiries                       paged list (?status), upsert (POST)
/// /inquiries/unread-count          unread count
/// /inquiries/{id}                  delete
///
/// /file/upload                     multipart upload (public)
/// /file/download/{filename}        attachment download (public)
///
/// /dashboard/stats                 headline counters
///
/// /visit-logs                      paged list
/// /visit-logs/stats/geo            visits per location
/// /visit-logs/stats/trend          visits per day, last 7 days
///
/// /blog/profile                    static blog data (public)
/// /blog/posts
/// /blog/posts/{id}
/// /blog/projects
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/content", content::router())
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/cases", cases::router())
        .nest("/contact", contact::router())
        .nest("/inquiries", inquiries::router())
        .nest("/file", file::router(config.max_upload_bytes))
        .nest("/dashboard", dashboard::router())
        .nest("/visit-logs", visit_logs::router())
        .nest("/blog", blog::router())
}
