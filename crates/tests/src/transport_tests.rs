use crate::common::{dead_backend_url, MockBackend, MockRoute};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use server::backend::{BackendError, CampusBackend};
use server::error_convert::BackendErrorExt;
use shared_types::{AppError, AppErrorKind, BackendConfig, LoginRequest};
use std::time::Duration;

#[tokio::test]
async fn test_refused_connection_maps_to_unavailable() {
    let backend = CampusBackend::new(&BackendConfig {
        base_url: dead_backend_url().await,
        timeout_secs: 2,
    })
    .unwrap();

    let err = backend
        .login(&LoginRequest {
            email: "ada@university.edu".into(),
            password: "hunter2".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Transport { endpoint: "/login", .. }));
    assert!(err.is_unreachable());

    let app = err.into_app_error();
    assert_eq!(app.kind, AppErrorKind::Unavailable);
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let mock = MockBackend::start(vec![MockRoute::json(
        "GET",
        "/admin/stats",
        StatusCode::OK,
        json!({"success": true, "total_students": 1}),
    )
    .delayed(Duration::from_secs(3))])
    .await;

    let err = mock.client(1).admin_stats().await.unwrap_err();
    assert!(err.is_unreachable(), "Expected a timeout, got {err:?}");
    assert_eq!(err.into_app_error().kind, AppErrorKind::Unavailable);
}

#[tokio::test]
async fn test_unregistered_route_is_decode_error() {
    let mock = MockBackend::start(Vec::new()).await;

    let err = mock.client(5).admin_stats().await.unwrap_err();
    assert!(matches!(err, BackendError::Decode { status: 404, .. }));

    let app = err.into_app_error();
    assert_eq!(app.kind, AppErrorKind::Upstream);
}

#[tokio::test]
async fn test_unavailable_error_survives_server_fn_boundary() {
    use server::error_convert::AppErrorExt;

    let original = AppError::unavailable("Campus backend unreachable");
    let sfe = original.clone().into_server_fn_error();
    let parsed = AppError::from_server_error(&sfe.to_string()).expect("should parse");
    assert_eq!(parsed, original);
}
