use crate::common::{MockBackend, MockRoute};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{LoginRequest, Role};

fn request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_login_sends_exactly_one_post_with_credentials() {
    let mock = MockBackend::start(vec![MockRoute::json(
        "POST",
        "/login",
        StatusCode::OK,
        json!({"success": true, "role": "student", "email": "ada@university.edu"}),
    )])
    .await;

    let resp = mock
        .client(5)
        .login(&request("ada@university.edu", "hunter2"))
        .await
        .expect("login should succeed");

    assert!(resp.success);
    assert_eq!(resp.role, Some(Role::Student));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1, "Expected a single backend request");
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/login");
    assert!(requests[0]
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("application/json"));
    assert_eq!(
        requests[0].json(),
        json!({"email": "ada@university.edu", "password": "hunter2"})
    );
}

#[tokio::test]
async fn test_admin_login_sends_username_as_email() {
    let mock = MockBackend::start(vec![MockRoute::json(
        "POST",
        "/login",
        StatusCode::OK,
        json!({"success": true, "role": "admin"}),
    )])
    .await;

    let resp = mock.client(5).login(&request("root", "s3cret")).await.unwrap();
    assert_eq!(resp.role, Some(Role::Admin));
    assert_eq!(mock.requests()[0].json()["email"], "root");
}

#[tokio::test]
async fn test_not_found_answer_is_decoded_as_rejection() {
    let mock = MockBackend::start(vec![MockRoute::json(
        "POST",
        "/login",
        StatusCode::NOT_FOUND,
        json!({"success": false, "message": "User not found"}),
    )])
    .await;

    let resp = mock
        .client(5)
        .login(&request("ghost@university.edu", "x"))
        .await
        .expect("a JSON failure body is data, not a transport error");

    assert!(!resp.success);
    assert_eq!(resp.message, "User not found");
    assert_eq!(resp.role, None);
}

#[tokio::test]
async fn test_wrong_password_is_decoded_as_rejection() {
    let mock = MockBackend::start(vec![MockRoute::json(
        "POST",
        "/login",
        StatusCode::UNAUTHORIZED,
        json!({"success": false, "message": "Invalid password"}),
    )])
    .await;

    let resp = mock.client(5).login(&request("ada@university.edu", "nope")).await.unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message, "Invalid password");
}

#[tokio::test]
async fn test_unknown_role_still_decodes() {
    let mock = MockBackend::start(vec![MockRoute::json(
        "POST",
        "/login",
        StatusCode::OK,
        json!({"success": true, "role": "faculty"}),
    )])
    .await;

    let resp = mock.client(5).login(&request("prof@university.edu", "pw")).await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.role, Some(Role::Unknown));
}
