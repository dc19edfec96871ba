//! In-process stand-in for the API, with AMap's geocoding endpoints.
//!
//! One fallback handler answers everything under `/api` and `/dev-api`
//! from JSON collections held in shared state, and records each call.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};

use tc_client::config::{ApiMode, ClientConfig};
use tc_client::context::AdminContext;
use tc_client::gateway::Gateway;
use tc_client::guard::RecordingNavigator;
use tc_client::notify::{FixedConfirm, RecordingNotifier};
use tc_client::session::Session;

pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "mock-token";
pub const AMAP_KEY: &str = "test-key";

/// Server-side data plus switches that make requests fail.
#[derive(Debug, Default)]
pub struct MockState {
    pub content: Vec<Value>,
    pub cases: Vec<Value>,
    pub categories: Vec<Value>,
    pub products: Vec<Value>,
    pub inquiries: Vec<Value>,
    pub contacts: Vec<Value>,
    pub uploads: Vec<String>,
    /// `"METHOD /path"` for every request, prefix included.
    pub calls: Vec<String>,
    /// `satoken` header of every request.
    pub tokens: Vec<Option<String>>,
    /// Answer every API call with HTTP 401.
    pub reject_http: bool,
    /// Answer every API call with HTTP 200 and envelope code 401.
    pub reject_envelope: bool,
    pub fail_content_save: bool,
    pub fail_upload: bool,
    next_id: i64,
}

impl MockState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        100 + self.next_id
    }

    pub fn count_calls(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| c.as_str() == call).count()
    }

    pub fn seed_inquiry(&mut self, name: &str, status: &str) -> i64 {
        let id = self.next_id();
        self.inquiries.push(json!({
            "id": id,
            "name": name,
            "phone": "13800000000",
            "content": "Need a quote",
            "status": status,
        }));
        id
    }

    pub fn seed_case(&mut self, title: &str) -> i64 {
        let id = self.next_id();
        self.cases.push(json!({ "id": id, "title": title }));
        id
    }

    pub fn seed_content(&mut self, item: Value) -> i64 {
        let id = self.next_id();
        let mut item = item;
        item["id"] = json!(id);
        self.content.push(item);
        id
    }

    pub fn seed_category(&mut self, name: &str) -> i64 {
        let id = self.next_id();
        self.categories.push(json!({ "id": id, "name": name, "sortOrder": 0 }));
        id
    }
}

#[derive(Clone, Default)]
pub struct Shared(Arc<Mutex<MockState>>);

impl Shared {
    pub fn lock(&self) -> MutexGuard<'_, MockState> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub struct MockServer {
    pub addr: SocketAddr,
    pub state: Shared,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = Shared::default();
        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, state }
    }

    pub fn origin(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::for_origin(self.origin());
        config.amap.base_url = self.origin();
        config.amap.key = Some(AMAP_KEY.to_string());
        config
    }

    pub fn dev_config(&self) -> ClientConfig {
        let mut config = self.config();
        config.mode = ApiMode::Development;
        config
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock()
    }
}

/// Gateway wired to a mock server, with recording collaborators.
pub struct Harness {
    pub server: MockServer,
    pub gateway: Gateway,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let config = server.config();
        Self::with_config(server, &config)
    }

    pub fn with_config(server: MockServer, config: &ClientConfig) -> Self {
        let navigator = Arc::new(RecordingNavigator::default());
        let gateway = Gateway::new(config, Session::in_memory(), navigator.clone()).unwrap();
        Self {
            server,
            gateway,
            navigator,
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    pub async fn logged_in() -> Self {
        let harness = Self::start().await;
        tc_client::resources::AuthApi::login(&harness.gateway, "admin", PASSWORD)
            .await
            .unwrap();
        harness
    }

    pub fn ctx(&self, confirm: bool) -> AdminContext {
        AdminContext::new(
            self.gateway.clone(),
            self.notifier.clone(),
            Arc::new(FixedConfirm(confirm)),
        )
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.server.state()
    }
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

fn ok(data: Value) -> Response {
    Json(json!({ "code": 200, "data": data, "message": "success" })).into_response()
}

fn fail(status: StatusCode, message: &str) -> Response {
    let body = json!({ "code": status.as_u16(), "data": null, "message": message });
    (status, Json(body)).into_response()
}

fn page(records: &[Value], params: &HashMap<String, String>) -> Value {
    let size = params
        .get("size")
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(10);
    let records: Vec<Value> = records.iter().take(size as usize).cloned().collect();
    let total = records.len() as i64;
    json!({ "records": records, "total": total, "size": size, "current": 1, "pages": 1 })
}

fn id_of(value: &Value) -> Option<i64> {
    value.get("id").and_then(Value::as_i64)
}

/// Insert or replace by `id`. Returns `false` when the id is unknown.
fn upsert(list: &mut Vec<Value>, mut value: Value, fresh_id: i64) -> bool {
    match id_of(&value) {
        Some(id) => match list.iter_mut().find(|v| id_of(v) == Some(id)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        },
        None => {
            value["id"] = json!(fresh_id);
            list.push(value);
            true
        }
    }
}

fn remove(list: &mut Vec<Value>, id: i64) -> bool {
    let before = list.len();
    list.retain(|v| id_of(v) != Some(id));
    list.len() != before
}

async fn handle(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let full_path = uri.path().to_string();

    if let Some(amap) = full_path.strip_prefix("/v3/geocode/") {
        return geocode(amap, &params);
    }

    let mut state = shared.lock();
    state.calls.push(format!("{method} {full_path}"));
    state.tokens.push(
        headers
            .get("satoken")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );

    let Some(path) = full_path
        .strip_prefix("/api")
        .or_else(|| full_path.strip_prefix("/dev-api"))
    else {
        return fail(StatusCode::NOT_FOUND, "Not found");
    };

    if state.reject_http {
        return fail(StatusCode::UNAUTHORIZED, "Not logged in");
    }
    if state.reject_envelope {
        return Json(json!({ "code": 401, "data": null, "message": "Not logged in" }))
            .into_response();
    }

    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    let fresh_id = state.next_id();

    match (method, segments.as_slice()) {
        (Method::POST, ["auth", "login"]) => {
            if payload["password"] == PASSWORD {
                ok(json!({
                    "token": TOKEN,
                    "user": { "id": 1, "username": payload["username"], "nickname": "Admin" }
                }))
            } else {
                fail(StatusCode::BAD_REQUEST, "Invalid username or password")
            }
        }
        (Method::POST, ["auth", "logout"]) => ok(Value::Null),
        (Method::GET, ["auth", "me"]) => ok(json!({ "id": 1, "username": "admin" })),

        (Method::GET, ["content", "all"]) => ok(json!(state.content)),
        (Method::GET, ["content", section]) => {
            let items: Vec<Value> = state
                .content
                .iter()
                .filter(|item| item["section"] == *section)
                .cloned()
                .collect();
            ok(json!(items))
        }
        (Method::POST, ["content"]) => {
            if state.fail_content_save {
                return fail(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
            }
            let saved = upsert(&mut state.content, payload, fresh_id);
            ok(json!(saved))
        }

        (Method::GET, ["cases"]) => ok(page(&state.cases, &params)),
        (Method::POST, ["cases"]) => ok(json!(upsert(&mut state.cases, payload, fresh_id))),
        (Method::DELETE, ["cases", id]) => {
            let id = id.parse().unwrap_or_default();
            ok(json!(remove(&mut state.cases, id)))
        }

        (Method::GET, ["categories"]) => ok(json!(state.categories)),
        (Method::POST, ["categories"]) => {
            ok(json!(upsert(&mut state.categories, payload, fresh_id)))
        }
        (Method::DELETE, ["categories", id]) => {
            let id = id.parse().unwrap_or_default();
            ok(json!(remove(&mut state.categories, id)))
        }

        (Method::GET, ["products"]) => {
            let featured_only = params.get("featured").is_some_and(|f| f == "true");
            let records: Vec<Value> = state
                .products
                .iter()
                .filter(|p| !featured_only || p["isFeatured"] == true)
                .cloned()
                .collect();
            ok(page(&records, &params))
        }
        (Method::GET, ["products", id]) => {
            let id: i64 = id.parse().unwrap_or_default();
            match state.products.iter().find(|p| id_of(p) == Some(id)) {
                Some(product) => ok(product.clone()),
                None => fail(StatusCode::NOT_FOUND, "Product not found"),
            }
        }
        (Method::POST, ["products"]) => {
            ok(json!(upsert(&mut state.products, payload, fresh_id)))
        }
        (Method::DELETE, ["products", id]) => {
            let id = id.parse().unwrap_or_default();
            ok(json!(remove(&mut state.products, id)))
        }

        (Method::GET, ["inquiries", "unread-count"]) => {
            let unread = state
                .inquiries
                .iter()
                .filter(|i| i["status"] == "unread")
                .count();
            ok(json!(unread))
        }
        (Method::GET, ["inquiries"]) => ok(page(&state.inquiries, &params)),
        (Method::POST, ["inquiries"]) => {
            ok(json!(upsert(&mut state.inquiries, payload, fresh_id)))
        }
        (Method::DELETE, ["inquiries", id]) => {
            let id = id.parse().unwrap_or_default();
            ok(json!(remove(&mut state.inquiries, id)))
        }

        (Method::POST, ["contact"]) => {
            state.contacts.push(payload);
            ok(json!(true))
        }

        (Method::POST, ["file", "upload"]) => {
            if state.fail_upload {
                return fail(StatusCode::INTERNAL_SERVER_ERROR, "Disk full");
            }
            let url = format!("/uploads/{fresh_id}.png");
            state.uploads.push(url.clone());
            ok(json!(url))
        }

        (Method::GET, ["dashboard", "stats"]) => ok(json!({
            "productCount": state.products.len(),
            "inquiryCount": state.inquiries.len(),
            "visitCount": 12,
        })),
        (Method::GET, ["visit-logs", "stats", "trend"]) => ok(json!([
            { "date": "2026-10-10", "count": 1 },
            { "date": "2026-10-11", "count": 0 },
            { "date": "2026-10-12", "count": 4 },
            { "date": "2026-10-13", "count": 2 },
            { "date": "2026-10-14", "count": 0 },
            { "date": "2026-10-15", "count": 3 },
            { "date": "2026-10-16", "count": 2 },
        ])),
        (Method::GET, ["visit-logs", "stats", "geo"]) => ok(json!([
            { "name": "Local", "value": 3 },
            { "name": "Jiangsu", "value": 9 },
        ])),

        (Method::GET, ["broken"]) => {
            (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response()
        }
        (Method::GET, ["rejected"]) => {
            Json(json!({ "code": 500, "data": null, "message": "" })).into_response()
        }

        _ => fail(StatusCode::NOT_FOUND, "Not found"),
    }
}

/// `geo` resolves any address containing "Suzhou"; `regeo` knows one point.
fn geocode(endpoint: &str, params: &HashMap<String, String>) -> Response {
    if params.get("key").map(String::as_str) != Some(AMAP_KEY) {
        return Json(json!({ "status": "0", "info": "INVALID_USER_KEY" })).into_response();
    }
    match endpoint {
        "geo" => {
            let address = params.get("address").cloned().unwrap_or_default();
            let geocodes = if address.contains("Suzhou") {
                json!([{ "location": "120.782874,31.365372" }])
            } else {
                json!([])
            };
            Json(json!({ "status": "1", "info": "OK", "geocodes": geocodes })).into_response()
        }
        "regeo" => {
            let formatted = if params.get("location").map(String::as_str)
                == Some("120.782874,31.365372")
            {
                json!("Suzhou Industrial Park")
            } else {
                json!([])
            };
            Json(json!({
                "status": "1",
                "info": "OK",
                "regeocode": { "formatted_address": formatted }
            }))
            .into_response()
        }
        _ => (StatusCode::NOT_FOUND, "unknown endpoint").into_response(),
    }
}
