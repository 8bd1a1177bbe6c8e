use dioxus::prelude::*;
use shared_types::LoginResponse;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, BackendErrorExt};

/// Forward a login attempt to the campus backend.
///
/// Both login tabs call this; the admin username travels in `email`.
/// A `success: false` answer is returned as data, not as an error.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<LoginResponse, ServerFnError> {
    use shared_types::LoginRequest;

    let backend = crate::backend::backend().map_err(|e| {
        tracing::error!(error = %e, "campus backend misconfigured");
        e.into_app_error().into_server_fn_error()
    })?;

    let response = backend
        .login(&LoginRequest { email, password })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "login request failed");
            e.into_app_error().into_server_fn_error()
        })?;

    tracing::info!(success = response.success, role = ?response.role, "login answered");
    Ok(response)
}
