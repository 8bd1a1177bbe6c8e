use crate::common::{MockBackend, MockRoute};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_stats_report_total_students() {
    let mock = MockBackend::start(vec![MockRoute::json(
        "GET",
        "/admin/stats",
        StatusCode::OK,
        json!({"success": true, "total_students": 17}),
    )])
    .await;

    let stats = mock.client(5).admin_stats().await.expect("stats should load");
    assert!(stats.success);
    assert_eq!(stats.total_students, 17);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/admin/stats");
}

#[tokio::test]
async fn test_stats_refusal_is_data() {
    let mock = MockBackend::start(vec![MockRoute::json(
        "GET",
        "/admin/stats",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"success": false, "message": "Failed to fetch admin stats"}),
    )])
    .await;

    let stats = mock.client(5).admin_stats().await.unwrap();
    assert!(!stats.success);
    assert_eq!(stats.message.as_deref(), Some("Failed to fetch admin stats"));
}

#[tokio::test]
async fn test_stats_base_path_is_preserved() {
    let mock = MockBackend::start(vec![MockRoute::json(
        "GET",
        "/api/admin/stats",
        StatusCode::OK,
        json!({"success": true, "total_students": 3}),
    )])
    .await;

    let backend = server::backend::CampusBackend::new(&shared_types::BackendConfig {
        base_url: format!("{}/api/", mock.base_url),
        timeout_secs: 5,
    })
    .unwrap();

    let stats = backend.admin_stats().await.unwrap();
    assert_eq!(stats.total_students, 3);
    assert_eq!(mock.requests()[0].path, "/api/admin/stats");
}
