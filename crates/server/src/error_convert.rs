use dioxus::prelude::ServerFnError;
use shared_types::AppError;

use crate::backend::BackendError;

/// Convert a backend failure into an AppError.
pub fn backend_to_app_error(err: &BackendError) -> AppError {
    match err {
        BackendError::InvalidUrl { .. } => AppError::internal(err.to_string()),
        BackendError::Transport { .. } if err.is_unreachable() => {
            AppError::unavailable(format!("Campus backend unreachable: {err}"))
        }
        BackendError::Transport { .. } | BackendError::Decode { .. } => {
            AppError::upstream(err.to_string())
        }
    }
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on BackendError.
pub trait BackendErrorExt {
    fn into_app_error(self) -> AppError;
}

impl BackendErrorExt for BackendError {
    fn into_app_error(self) -> AppError {
        backend_to_app_error(&self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}
