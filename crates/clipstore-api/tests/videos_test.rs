//! HTTP-level tests for the video endpoints, wired to mock collaborators.

use axum::http::StatusCode;
use axum_test::TestServer;
use clipstore_api::setup::routes::build_router;
use clipstore_api::state::AppState;
use clipstore_api::test_helpers::{InMemoryVideoRepository, MockStorage};
use clipstore_core::Config;
use serde_json::{json, Value};
use std::sync::Arc;

fn test_config() -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        db_timeout_seconds: 1,
        s3_bucket: "videos".to_string(),
        s3_region: "us-east-1".to_string(),
        s3_endpoint: None,
        presign_expiry_secs: 3600,
    }
}

fn test_server(videos: Arc<InMemoryVideoRepository>, storage: Arc<MockStorage>) -> TestServer {
    let state = Arc::new(AppState::new(test_config(), videos, storage));
    let router = build_router(state).unwrap();
    TestServer::new(router).unwrap()
}

fn create_body() -> Value {
    json!({
        "title": "Intro",
        "category": "education",
        "video": {"filename": "v.mp4", "mimeType": "video/mp4", "size": 1048576},
        "thumbnail": {"filename": "t.jpg", "mimeType": "image/jpeg", "size": 20480}
    })
}

#[tokio::test]
async fn create_returns_created_with_both_authorizations() {
    let videos = Arc::new(InMemoryVideoRepository::new());
    let storage = Arc::new(MockStorage::new());
    let server = test_server(videos.clone(), storage);

    let response = server.post("/api/videos").json(&create_body()).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["videoMetadata"]["status"], "uploading");
    assert_eq!(body["videoMetadata"]["title"], "Intro");
    assert!(!body["presignedUrls"]["video"]["uploadId"]
        .as_str()
        .unwrap()
        .is_empty());
    assert!(!body["presignedUrls"]["thumbnail"]["url"]
        .as_str()
        .unwrap()
        .is_empty());

    assert_eq!(videos.len(), 1);
}

#[tokio::test]
async fn empty_title_is_a_client_error() {
    let server = test_server(
        Arc::new(InMemoryVideoRepository::new()),
        Arc::new(MockStorage::new()),
    );

    let mut body = create_body();
    body["title"] = json!("");
    let response = server.post("/api/videos").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn repository_failure_returns_generic_server_error() {
    let storage = Arc::new(MockStorage::new());
    let server = test_server(Arc::new(InMemoryVideoRepository::failing()), storage.clone());

    let response = server.post("/api/videos").json(&create_body()).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    // No internal detail leaks to the caller.
    let body: Value = response.json();
    assert_eq!(body["error"], "Internal server error");

    // And storage was never contacted.
    assert!(storage.initiations().is_empty());
    assert!(storage.presigns().is_empty());
}

#[tokio::test]
async fn part_presign_returns_the_storage_url_unchanged() {
    let storage = Arc::new(MockStorage::new());
    let server = test_server(Arc::new(InMemoryVideoRepository::new()), storage.clone());

    let response = server
        .post("/api/videos/parts/presign")
        .json(&json!({
            "videoId": "v1",
            "filename": "v.mp4",
            "mimeType": "video/mp4",
            "uploadId": "u1",
            "partNumber": 3
        }))
        .await;
    response.assert_status_ok();

    let presigns = storage.presigns();
    assert_eq!(presigns.len(), 1);
    assert_eq!(presigns[0].part_number, Some(3));
    assert_eq!(presigns[0].upload_id.as_deref(), Some("u1"));

    let body: Value = response.json();
    assert_eq!(
        body["url"].as_str().unwrap(),
        MockStorage::presigned_url_for(&presigns[0])
    );
}

#[tokio::test]
async fn zero_part_number_is_rejected() {
    let server = test_server(
        Arc::new(InMemoryVideoRepository::new()),
        Arc::new(MockStorage::new()),
    );

    let response = server
        .post("/api/videos/parts/presign")
        .json(&json!({
            "videoId": "v1",
            "filename": "v.mp4",
            "mimeType": "video/mp4",
            "uploadId": "u1",
            "partNumber": 0
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_ok() {
    let server = test_server(
        Arc::new(InMemoryVideoRepository::new()),
        Arc::new(MockStorage::new()),
    );

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "clipstore-api");
}
