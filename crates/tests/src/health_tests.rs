use crate::common::{dead_backend_url, get, MockBackend, MockRoute};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use server::backend::CampusBackend;
use server::health;
use shared_types::BackendConfig;

#[tokio::test]
async fn test_health_ok_when_backend_answers() {
    let mock = MockBackend::start(vec![MockRoute::json(
        "GET",
        "/",
        StatusCode::OK,
        json!({"status": "running"}),
    )])
    .await;

    let app = health::router(mock.client(2));
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"]["reachable"], true);
    assert_eq!(body["backend"]["status_code"], 200);
    assert_eq!(body["backend"]["base_url"], mock.base_url.as_str());
    assert!(body["backend"].get("error").is_none());
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_health_counts_any_http_answer_as_reachable() {
    let mock = MockBackend::start(Vec::new()).await;

    let app = health::router(mock.client(2));
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"]["status_code"], 404);
}

#[tokio::test]
async fn test_health_degraded_when_backend_down() {
    let backend = CampusBackend::new(&BackendConfig {
        base_url: dead_backend_url().await,
        timeout_secs: 2,
    })
    .unwrap();

    let app = health::router(backend);
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK, "health itself must stay up");
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["backend"]["reachable"], false);
    assert!(body["backend"].get("status_code").is_none());
    assert!(body["backend"]["error"].is_string());
}

#[tokio::test]
async fn test_health_does_not_touch_other_paths() {
    let mock = MockBackend::start(Vec::new()).await;
    let app = health::router(mock.client(2));

    let (status, _) = get(&app, "/status").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(mock.requests().is_empty());
}
