//! Integration tests for the invitation server routes.

use std::fs;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use vows_cli::server::{AppState, create_router};

const INDEX_HTML: &str = "<!doctype html><title>invite</title><div id=\"app\"></div>";

/// Public root with an index page and a couple of images.
fn create_public_root() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    fs::write(root.join("index.html"), INDEX_HTML).expect("Failed to write index");
    fs::create_dir_all(root.join("desktop-background")).unwrap();
    fs::create_dir_all(root.join("mobile-background")).unwrap();
    fs::write(root.join("desktop-background/b.png"), b"png").unwrap();
    fs::write(root.join("desktop-background/a.jpg"), b"jpg").unwrap();
    fs::write(root.join("desktop-background/notes.txt"), b"txt").unwrap();
    fs::write(root.join("mobile-background/m.webp"), b"webp").unwrap();

    temp_dir
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let public = create_public_root();
    let app = create_router(AppState::new(public.path().to_path_buf()));

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

// ============================================================================
// Gallery
// ============================================================================

#[tokio::test]
async fn test_gallery_lists_images_in_order() {
    let public = create_public_root();
    let app = create_router(AppState::new(public.path().to_path_buf()));

    let (status, json) = get_json(&app, "/gallery.json").await;

    assert_eq!(status, StatusCode::OK);
    let srcs: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["src"].as_str().unwrap())
        .collect();
    assert_eq!(
        srcs,
        vec![
            "/desktop-background/a.jpg",
            "/desktop-background/b.png",
            "/mobile-background/m.webp",
        ]
    );
}

#[tokio::test]
async fn test_gallery_is_not_cached() {
    let public = create_public_root();
    let app = create_router(AppState::new(public.path().to_path_buf()));

    let (_, headers, _) = get(&app, "/gallery.json").await;

    assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-store");
}

#[tokio::test]
async fn test_gallery_reflects_new_files() {
    let public = create_public_root();
    let app = create_router(AppState::new(public.path().to_path_buf()));

    let (_, before) = get_json(&app, "/gallery.json").await;
    fs::write(public.path().join("mobile-background/new.gif"), b"gif").unwrap();
    let (_, after) = get_json(&app, "/gallery.json").await;

    assert_eq!(before.as_array().unwrap().len(), 3);
    assert_eq!(after.as_array().unwrap().len(), 4);
    assert_eq!(after[3]["src"], "/mobile-background/new.gif");
    assert_eq!(after[3]["category"], "mobile");
}

#[tokio::test]
async fn test_gallery_empty_when_directories_missing() {
    let public = TempDir::new().unwrap();
    let app = create_router(AppState::new(public.path().to_path_buf()));

    let (status, json) = get_json(&app, "/gallery.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, Value::Array(vec![]));
}

// ============================================================================
// Static files
// ============================================================================

#[tokio::test]
async fn test_serves_image_files() {
    let public = create_public_root();
    let app = create_router(AppState::new(public.path().to_path_buf()));

    let (status, _, body) = get(&app, "/desktop-background/a.jpg").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"jpg");
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_index() {
    let public = create_public_root();
    let app = create_router(AppState::new(public.path().to_path_buf()));

    let (status, _, body) = get(&app, "/gallery").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), INDEX_HTML);
}
