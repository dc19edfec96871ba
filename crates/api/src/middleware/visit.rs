//! Visit logging for public API reads.
//!
//! Every GET under `/api` that is not an admin or auth route is recorded in
//! `visit_logs`. The insert runs on a spawned task so a slow or failing
//! database never delays or fails the request being logged.

use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, Method};
use axum::middleware::Next;
use axum::response::Response;
use tc_db::models::visit_log::CreateVisitLog;
use tc_db::repositories::visit_log_repo::UNKNOWN_LOCATION;
use tc_db::repositories::VisitLogRepo;

use crate::state::AppState;

/// Location label for loopback clients.
pub const LOCAL_LOCATION: &str = "本地访问";
/// Location label for private-network clients.
pub const INTRANET_LOCATION: &str = "内网访问";

/// Prefixes never recorded: authentication and back-office reads.
const SKIPPED_PREFIXES: [&str; 4] = [
    "/api/auth",
    "/api/dashboard",
    "/api/visit-logs",
    "/api/inquiries",
];

/// Proxy headers consulted for the client address, in order.
const CLIENT_IP_HEADERS: [&str; 3] = ["x-forwarded-for", "proxy-client-ip", "wl-proxy-client-ip"];

pub async fn record_visit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.config.visit_log_enabled
        && request.method() == Method::GET
        && should_record(request.uri().path())
    {
        let remote = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());
        let ip = client_ip(request.headers(), remote);
        let entry = CreateVisitLog {
            location: Some(resolve_location(&ip).to_string()),
            ip,
            path: request.uri().path().to_string(),
            method: request.method().to_string(),
            user_agent: request
                .headers()
                .get(axum::http::header::USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        };

        let pool = state.pool.clone();
        tokio::spawn(async move {
            if let Err(e) = VisitLogRepo::create(&pool, &entry).await {
                tracing::warn!(error = %e, path = %entry.path, "Failed to record visit");
            }
        });
    }

    next.run(request).await
}

/// Whether a GET to `path` counts as a public visit. Paths with a dot are
/// static files.
pub fn should_record(path: &str) -> bool {
    path.starts_with("/api/")
        && !path.contains('.')
        && !SKIPPED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Client address from proxy headers, falling back to the socket peer.
pub fn client_ip(headers: &HeaderMap, remote: Option<IpAddr>) -> String {
    for name in CLIENT_IP_HEADERS {
        let candidate = headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("unknown"));
        if let Some(ip) = candidate {
            return ip.to_string();
        }
    }
    remote
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Coarse location label for an address.
pub fn resolve_location(ip: &str) -> &'static str {
    match ip.parse::<IpAddr>() {
        Ok(addr) if addr.is_loopback() => LOCAL_LOCATION,
        Ok(IpAddr::V4(v4)) if v4.is_private() || v4.is_link_local() => INTRANET_LOCATION,
        Ok(IpAddr::V6(v6)) if (v6.segments()[0] & 0xfe00) == 0xfc00 => INTRANET_LOCATION,
        _ => UNKNOWN_LOCATION,
    }
}
