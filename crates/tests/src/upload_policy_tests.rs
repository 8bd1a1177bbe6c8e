use crate::common::{MockBackend, MockRoute};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::UploadAttempt;

const PDF_BYTES: &[u8] = b"%PDF-1.4 campus guidelines";

fn upload_route(status: StatusCode, body: serde_json::Value) -> MockRoute {
    MockRoute::json("POST", "/admin/upload-policy", status, body)
}

#[tokio::test]
async fn test_upload_sends_multipart_with_file_and_uploader() {
    let mock = MockBackend::start(vec![upload_route(
        StatusCode::OK,
        json!({"success": true, "message": "Policy uploaded successfully", "file_url": "https://cdn.example/g.pdf"}),
    )])
    .await;

    let attempt = UploadAttempt::new("Guidelines.pdf", None, PDF_BYTES.to_vec());
    let resp = mock
        .client(5)
        .upload_policy(attempt)
        .await
        .expect("upload should succeed");

    assert!(resp.success);
    assert_eq!(resp.file_url.as_deref(), Some("https://cdn.example/g.pdf"));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1, "Expected exactly one upload request");

    let req = &requests[0];
    assert_eq!(req.path, "/admin/upload-policy");
    assert!(req
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("multipart/form-data"));

    let body = req.body_text();
    let headers = body.to_lowercase();
    assert!(headers.contains(r#"name="file"; filename="guidelines.pdf""#), "file part missing: {body}");
    assert!(headers.contains("content-type: application/pdf"));
    assert!(body.contains("%PDF-1.4 campus guidelines"));
    assert!(headers.contains(r#"name="uploaded_by""#));
    assert!(body.contains("admin@campus.com"));
}

#[tokio::test]
async fn test_upload_failure_message_is_returned() {
    let mock = MockBackend::start(vec![upload_route(
        StatusCode::BAD_REQUEST,
        json!({"success": false, "message": "Only PDF files are allowed"}),
    )])
    .await;

    let attempt = UploadAttempt::new("notes.pdf", Some("application/pdf".into()), vec![0; 16]);
    let resp = mock.client(5).upload_policy(attempt).await.unwrap();

    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("Only PDF files are allowed"));
    assert_eq!(resp.file_url, None);
}

#[tokio::test]
async fn test_upload_html_error_page_is_decode_error() {
    let mock = MockBackend::start(vec![MockRoute::raw(
        "POST",
        "/admin/upload-policy",
        StatusCode::BAD_GATEWAY,
        "<html>Bad Gateway</html>",
    )])
    .await;

    let attempt = UploadAttempt::new("g.pdf", None, PDF_BYTES.to_vec());
    let err = mock.client(5).upload_policy(attempt).await.unwrap_err();

    match &err {
        server::backend::BackendError::Decode { endpoint, status, .. } => {
            assert_eq!(*endpoint, "/admin/upload-policy");
            assert_eq!(*status, 502);
        }
        other => panic!("Expected a decode error, got {other:?}"),
    }
    assert!(!err.is_unreachable());
}
