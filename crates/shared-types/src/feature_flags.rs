use serde::{Deserialize, Serialize};

/// Default campus backend when neither `config.toml` nor the environment
/// names one. Matches the development server's bind address.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Default timeout for a single backend request, in seconds.
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 15;

/// Feature flags controlling which optional behaviour is active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
    #[serde(default = "default_true")]
    pub policy_upload: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            telemetry: false,
            policy_upload: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Where the campus backend lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_BACKEND_TIMEOUT_SECS
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub backend: BackendConfig,
}
