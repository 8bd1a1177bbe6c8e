use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;
use server::backend::CampusBackend;
use shared_types::BackendConfig;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// One canned answer of the mock CampusAI backend.
#[derive(Debug, Clone)]
pub struct MockRoute {
    pub method: &'static str,
    pub path: &'static str,
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl MockRoute {
    pub fn json(method: &'static str, path: &'static str, status: StatusCode, body: Value) -> Self {
        Self {
            method,
            path,
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(method: &'static str, path: &'static str, status: StatusCode, body: &str) -> Self {
        Self {
            method,
            path,
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone)]
struct MockState {
    routes: Arc<Vec<MockRoute>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stand-in for the CampusAI backend, bound to an ephemeral port.
pub struct MockBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub async fn start(routes: Vec<MockRoute>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            routes: Arc::new(routes),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(answer).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("mock backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend stopped");
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("poisoned").clone()
    }

    /// Client pointed at this mock with the given timeout.
    pub fn client(&self, timeout_secs: u64) -> CampusBackend {
        CampusBackend::new(&BackendConfig {
            base_url: self.base_url.clone(),
            timeout_secs,
        })
        .expect("Failed to build backend client")
    }
}

async fn answer(State(state): State<MockState>, req: Request<Body>) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(req.into_body(), usize::MAX)
        .await
        .expect("Failed to read request body")
        .to_vec();

    state.requests.lock().expect("poisoned").push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        content_type,
        body,
    });

    let route = state
        .routes
        .iter()
        .find(|r| r.method == method && r.path == path)
        .cloned();

    match route {
        Some(route) => {
            if !route.delay.is_zero() {
                tokio::time::sleep(route.delay).await;
            }
            (
                route.status,
                [(header::CONTENT_TYPE, "application/json")],
                route.body,
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "no such route").into_response(),
    }
}

/// A base URL nothing listens on.
pub async fn dead_backend_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe port");
    let addr = listener.local_addr().expect("probe has no address");
    drop(listener);
    format!("http://{addr}")
}

/// GET a route on an in-process router.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
    (status, body)
}
