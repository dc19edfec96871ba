//! Upload and download against a temporary upload directory.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, build_offline_app, build_test_app, get, lazy_pool, post_multipart};

#[tokio::test]
async fn upload_stores_file_under_a_generated_name() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(lazy_pool(), dir.path());

    let response = post_multipart(app, "/api/file/upload", "file", "Drawing.PDF", b"%PDF-1.7").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["code"], 200);
    let url = json["data"].as_str().expect("data should be the file URL");
    let name = url.strip_prefix("/uploads/").expect("URL under /uploads/");
    assert!(name.ends_with(".pdf"), "extension kept lower-case: {name}");
    assert_ne!(name, "Drawing.pdf");

    let stored = std::fs::read(dir.path().join(name)).unwrap();
    assert_eq!(stored, b"%PDF-1.7");
}

#[tokio::test]
async fn uploaded_file_is_downloadable_and_served_statically() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(lazy_pool(), dir.path());

    let response = post_multipart(app.clone(), "/api/file/upload", "file", "part.step", b"ISO-10303").await;
    let url = body_json(response).await["data"].as_str().unwrap().to_string();
    let name = url.trim_start_matches("/uploads/").to_string();

    let response = get(app.clone(), &format!("/api/file/download/{name}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/octet-stream");
    let disposition = response.headers()["content-disposition"].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment"), "{disposition}");
    assert_eq!(body_bytes(response).await, b"ISO-10303");

    let response = get(app, &url).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"ISO-10303");
}

#[tokio::test]
async fn empty_upload_is_rejected() {
    let (app, _dir) = build_offline_app();
    let response = post_multipart(app, "/api/file/upload", "file", "empty.png", b"").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "File is empty");
}

#[tokio::test]
async fn upload_without_file_field_is_rejected() {
    let (app, _dir) = build_offline_app();
    let response = post_multipart(app, "/api/file/upload", "attachment", "a.png", b"png").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn download_rejects_path_traversal() {
    let (app, _dir) = build_offline_app();
    let response = get(app, "/api/file/download/..%2Fsecrets.env").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn download_of_missing_file_is_404() {
    let (app, _dir) = build_offline_app();
    let response = get(app, "/api/file/download/missing.png").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], 404);
}
