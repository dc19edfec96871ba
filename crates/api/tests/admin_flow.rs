//! End-to-end admin flows against a real database.
//!
//! Ignored unless `DATABASE_URL` points at PostgreSQL:
//! `cargo test -p tc-api -- --ignored`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, get_auth, post_json, post_json_auth};
use serde_json::json;
use sqlx::PgPool;
use tc_api::auth::password::hash_password;
use tc_db::models::user::CreateSysUser;
use tc_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const PASSWORD: &str = "factory-floor-42";

async fn create_admin(pool: &PgPool) {
    UserRepo::create(
        pool,
        &CreateSysUser {
            username: "admin".into(),
            nickname: Some("Administrator".into()),
            password_hash: hash_password(PASSWORD).expect("hashing should succeed"),
        },
    )
    .await
    .expect("user creation should succeed");
}

/// Log in through the API and return the token.
async fn login(pool: &PgPool) -> String {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(pool.clone(), dir.path());
    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "admin", "password": PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["user"]["username"], "admin");
    json["data"]["token"].as_str().unwrap().to_string()
}

fn test_app(pool: &PgPool) -> (axum::Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    (build_test_app(pool.clone(), dir.path()), dir)
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn login_then_me(pool: PgPool) {
    create_admin(&pool).await;
    let token = login(&pool).await;

    let (app, _dir) = test_app(&pool);
    let json = body_json(get_auth(app, "/api/auth/me", &token).await).await;
    assert_eq!(json["data"]["nickname"], "Administrator");
    assert!(json["data"].get("passwordHash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn wrong_password_is_unauthorized(pool: PgPool) {
    create_admin(&pool).await;
    let (app, _dir) = test_app(&pool);
    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "admin", "password": "nope" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn second_hero_is_a_conflict(pool: PgPool) {
    create_admin(&pool).await;
    let token = login(&pool).await;

    let (app, _dir) = test_app(&pool);
    let response = post_json_auth(
        app,
        "/api/content",
        json!({ "section": "home_hero", "title": "Another hero" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], 409);
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn legacy_coordinates_in_image_move_to_location(pool: PgPool) {
    create_admin(&pool).await;
    let token = login(&pool).await;

    let (app, _dir) = test_app(&pool);
    let response = post_json_auth(
        app,
        "/api/content",
        json!({
            "section": "contact_info",
            "title": "Warehouse address",
            "icon": "location_on",
            "image": "31.300000,120.600000",
            "sortOrder": 9,
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (app, _dir) = test_app(&pool);
    let json = body_json(get(app, "/api/content/contact_info").await).await;
    let items = json["data"].as_array().unwrap();
    let warehouse = items
        .iter()
        .find(|i| i["title"] == "Warehouse address")
        .expect("saved item is listed");
    assert!(warehouse["image"].is_null());
    assert_eq!(warehouse["location"]["lat"], 31.3);
    assert_eq!(warehouse["location"]["lng"], 120.6);
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn saved_product_is_listed_publicly(pool: PgPool) {
    create_admin(&pool).await;
    let token = login(&pool).await;

    let (app, _dir) = test_app(&pool);
    let response = post_json_auth(
        app,
        "/api/products",
        json!({
            "name": "Spindle housing",
            "category": "  Machined   parts ",
            "price": 88.0,
            "specs": { "Material": "45# steel" },
            "isFeatured": true,
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (app, _dir) = test_app(&pool);
    let json = body_json(get(app, "/api/products?featured=true&size=5").await).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["size"], 5);
    let product = &json["data"]["records"][0];
    assert_eq!(product["category"], "Machined parts");
    assert_eq!(product["status"], "In Stock");
    assert_eq!(product["specs"]["Material"], "45# steel");
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn negative_price_is_rejected(pool: PgPool) {
    create_admin(&pool).await;
    let token = login(&pool).await;

    let (app, _dir) = test_app(&pool);
    let response = post_json_auth(
        app,
        "/api/products",
        json!({ "name": "Bolt", "price": -1.0 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Inquiries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn contact_submission_becomes_unread_inquiry(pool: PgPool) {
    create_admin(&pool).await;
    let token = login(&pool).await;

    let (app, _dir) = test_app(&pool);
    let response = post_json(
        app,
        "/api/contact",
        json!({ "name": "Li Wei", "phone": "13800000000", "content": "Quote for flanges" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (app, _dir) = test_app(&pool);
    let json = body_json(get_auth(app, "/api/inquiries/unread-count", &token).await).await;
    assert_eq!(json["data"], 1);

    let (app, _dir) = test_app(&pool);
    let json = body_json(get_auth(app, "/api/inquiries?status=unread", &token).await).await;
    let inquiry = json["data"]["records"][0].clone();
    assert_eq!(inquiry["status"], "unread");

    let (app, _dir) = test_app(&pool);
    let mut update = inquiry;
    update["status"] = json!("read");
    let response = post_json_auth(app, "/api/inquiries", update, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let (app, _dir) = test_app(&pool);
    let json = body_json(get_auth(app, "/api/inquiries/unread-count", &token).await).await;
    assert_eq!(json["data"], 0);
}
