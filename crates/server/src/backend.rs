//! HTTP client for the CampusAI backend.
//!
//! The backend answers application failures with non-2xx statuses and a
//! JSON body (`404 {"success": false, "message": "User not found"}`), so
//! responses are decoded regardless of status. Only a failed exchange or an
//! undecodable body is an error here.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use shared_types::{
    AdminStats, BackendConfig, LoginRequest, LoginResponse, UploadAttempt, UploadPolicyResponse,
};
use std::sync::OnceLock;
use std::time::Duration;

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_STATS_PATH: &str = "/admin/stats";
pub const UPLOAD_POLICY_PATH: &str = "/admin/upload-policy";

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("invalid backend url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("undecodable response from {endpoint} (status {status}): {reason}")]
    Decode {
        endpoint: &'static str,
        status: u16,
        reason: String,
    },
}

impl BackendError {
    /// The backend could not be reached or did not answer in time.
    pub fn is_unreachable(&self) -> bool {
        match self {
            BackendError::Transport { source, .. } => source.is_connect() || source.is_timeout(),
            _ => false,
        }
    }
}

/// Thin wrapper around a pooled `reqwest::Client` bound to one base URL.
#[derive(Debug, Clone)]
pub struct CampusBackend {
    client: Client,
    base_url: String,
}

impl CampusBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| BackendError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BackendError::InvalidUrl {
                url: config.base_url.clone(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| BackendError::Transport {
                endpoint: "client",
                source,
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /login` with `{email, password}`.
    #[tracing::instrument(skip_all, fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, BackendError> {
        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(request)
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                endpoint: LOGIN_PATH,
                source,
            })?;
        decode(LOGIN_PATH, response).await
    }

    /// `GET /admin/stats`.
    #[tracing::instrument(skip_all)]
    pub async fn admin_stats(&self) -> Result<AdminStats, BackendError> {
        let response = self
            .client
            .get(self.url(ADMIN_STATS_PATH))
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                endpoint: ADMIN_STATS_PATH,
                source,
            })?;
        decode(ADMIN_STATS_PATH, response).await
    }

    /// `POST /admin/upload-policy` as multipart with `file` and `uploaded_by`.
    #[tracing::instrument(
        skip_all,
        fields(file_name = %attempt.file_name, size = attempt.bytes.len())
    )]
    pub async fn upload_policy(
        &self,
        attempt: UploadAttempt,
    ) -> Result<UploadPolicyResponse, BackendError> {
        let part = Part::bytes(attempt.bytes)
            .file_name(attempt.file_name)
            .mime_str(&attempt.content_type)
            .map_err(|source| BackendError::Transport {
                endpoint: UPLOAD_POLICY_PATH,
                source,
            })?;
        let form = Form::new()
            .part("file", part)
            .text("uploaded_by", attempt.uploaded_by);

        let response = self
            .client
            .post(self.url(UPLOAD_POLICY_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                endpoint: UPLOAD_POLICY_PATH,
                source,
            })?;
        decode(UPLOAD_POLICY_PATH, response).await
    }

    /// Any HTTP answer from the base URL counts as reachable. Returns the
    /// status code.
    pub async fn ping(&self) -> Result<u16, BackendError> {
        let response = self
            .client
            .get(self.url("/"))
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                endpoint: "/",
                source,
            })?;
        Ok(response.status().as_u16())
    }
}

async fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|source| BackendError::Transport { endpoint, source })?;

    if !status.is_success() {
        tracing::warn!(endpoint, status = status.as_u16(), "backend answered with non-success status");
    }

    serde_json::from_slice(&body).map_err(|e| BackendError::Decode {
        endpoint,
        status: status.as_u16(),
        reason: e.to_string(),
    })
}

static BACKEND: OnceLock<CampusBackend> = OnceLock::new();

/// Process-wide backend client built from the loaded config.
pub fn backend() -> Result<&'static CampusBackend, BackendError> {
    if let Some(backend) = BACKEND.get() {
        return Ok(backend);
    }
    let built = CampusBackend::new(crate::config::backend_config())?;
    Ok(BACKEND.get_or_init(|| built))
}
