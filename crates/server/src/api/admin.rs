use dioxus::prelude::*;
use shared_types::{AdminStats, AdminWidgets, UploadPolicyResponse};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, BackendErrorExt};

/// Fetch the dashboard figures from the campus backend.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_admin_stats() -> Result<AdminStats, ServerFnError> {
    let backend = crate::backend::backend().map_err(|e| e.into_app_error().into_server_fn_error())?;

    let stats = backend.admin_stats().await.map_err(|e| {
        tracing::error!(error = %e, "admin stats request failed");
        e.into_app_error().into_server_fn_error()
    })?;

    if !stats.success {
        tracing::warn!(reason = ?stats.message, "backend refused admin stats");
    }
    Ok(stats)
}

/// Send a policy document to the campus backend.
///
/// The file arrives as raw bytes and leaves as a multipart form with
/// `file` and `uploaded_by`.
#[cfg_attr(feature = "server", tracing::instrument(skip(file_bytes)))]
#[server]
pub async fn upload_policy(
    file_name: String,
    content_type: String,
    file_bytes: Vec<u8>,
    uploaded_by: String,
) -> Result<UploadPolicyResponse, ServerFnError> {
    use shared_types::{AppError, UploadAttempt};

    if !crate::config::feature_flags().policy_upload {
        return Err(AppError::disabled("Policy uploads are disabled").into_server_fn_error());
    }

    if file_name.trim().is_empty() {
        return Err(AppError::bad_request("file_name must not be empty").into_server_fn_error());
    }

    let mut attempt = UploadAttempt::new(file_name, Some(content_type), file_bytes);
    if !uploaded_by.trim().is_empty() {
        attempt.uploaded_by = uploaded_by;
    }

    let backend = crate::backend::backend().map_err(|e| e.into_app_error().into_server_fn_error())?;
    let response = backend.upload_policy(attempt).await.map_err(|e| {
        tracing::error!(error = %e, "policy upload failed");
        e.into_app_error().into_server_fn_error()
    })?;

    tracing::info!(success = response.success, "policy upload answered");
    Ok(response)
}

/// Demo content for the dashboard widgets without a live data source.
#[server]
pub async fn get_admin_widgets() -> Result<AdminWidgets, ServerFnError> {
    Ok(crate::widgets::placeholder_widgets())
}
