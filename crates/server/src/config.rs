use shared_types::{AppConfig, BackendConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Upper bound for a request body when `MAX_UPLOAD_BYTES` is unset.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Read `config.toml` and the environment, and store the result in the
/// global `OnceLock`. Only the first call has effect.
///
/// A missing or unparseable file falls back to defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                eprintln!("[config] {CONFIG_PATH} not found ({e}), using defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(&mut config.backend, |key| std::env::var(key).ok());
        eprintln!(
            "[config] Feature flags: {:?}, backend: {}",
            config.features, config.backend.base_url
        );
        config
    })
}

/// Parse the contents of `config.toml`, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

/// Apply `CAMPUS_API_URL` and `CAMPUS_API_TIMEOUT_SECS` on top of the file
/// values. Blank or unparseable values are ignored.
pub fn apply_env_overrides(backend: &mut BackendConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup("CAMPUS_API_URL").filter(|v| !v.trim().is_empty()) {
        backend.base_url = url.trim().to_string();
    }
    if let Some(secs) = lookup("CAMPUS_API_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
        backend.timeout_secs = secs;
    }
}

/// Loaded feature flags. Loads the config on first use.
pub fn feature_flags() -> &'static FeatureFlags {
    &load_config().features
}

/// Where the campus backend lives. Loads the config on first use.
pub fn backend_config() -> &'static BackendConfig {
    &load_config().backend
}

/// Request body limit for the server router.
pub fn max_upload_bytes() -> usize {
    std::env::var("MAX_UPLOAD_BYTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        assert_eq!(parse_config("[features\ntelemetry = "), AppConfig::default());
    }

    #[test]
    fn env_url_overrides_file() {
        let mut backend = parse_config("[backend]\nbase_url = \"http://file:1\"").backend;
        apply_env_overrides(&mut backend, env(&[("CAMPUS_API_URL", " http://env:2 ")]));
        assert_eq!(backend.base_url, "http://env:2");
        assert_eq!(backend.timeout_secs, 15);
    }

    #[test]
    fn env_timeout_overrides_file() {
        let mut backend = BackendConfig::default();
        apply_env_overrides(&mut backend, env(&[("CAMPUS_API_TIMEOUT_SECS", "3")]));
        assert_eq!(backend.timeout_secs, 3);
    }

    #[test]
    fn blank_or_bad_env_values_are_ignored() {
        let mut backend = BackendConfig::default();
        apply_env_overrides(
            &mut backend,
            env(&[("CAMPUS_API_URL", "  "), ("CAMPUS_API_TIMEOUT_SECS", "soon")]),
        );
        assert_eq!(backend, BackendConfig::default());
    }
}
