//! Gateway configuration types.
//!
//! This module defines configuration structures for the HTTP gateway.

use std::time::Duration;

use serde::Deserialize;

use skillswap_client::ClientConfig;
use skillswap_session::GuardConfig;

/// Configuration for the gateway service.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Listen address (e.g., "0.0.0.0:3000").
    #[serde(default = "GatewayConfig::default_listen_addr")]
    pub listen_addr: String,

    /// Base address of the resource API.
    #[serde(default = "GatewayConfig::default_backend_url")]
    pub backend_url: String,

    /// Name of the session cookie.
    #[serde(default = "GatewayConfig::default_session_cookie")]
    pub session_cookie: String,

    /// Where unauthenticated visitors are redirected.
    #[serde(default = "GatewayConfig::default_login_path")]
    pub login_path: String,

    /// Allowed CORS origins.
    #[serde(default = "GatewayConfig::default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    #[serde(default = "GatewayConfig::default_max_body")]
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    #[serde(default = "GatewayConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl GatewayConfig {
    fn default_listen_addr() -> String {
        "0.0.0.0:3000".to_string()
    }

    fn default_backend_url() -> String {
        "http://localhost:8000".to_string()
    }

    fn default_session_cookie() -> String {
        "session".to_string()
    }

    fn default_login_path() -> String {
        "/login".to_string()
    }

    fn default_cors_origins() -> Vec<String> {
        vec!["*".to_string()]
    }

    const fn default_max_body() -> usize {
        64 * 1024 // 64 KB
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Client configuration for reaching the resource API.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            request_timeout_seconds: self.request_timeout_seconds,
            ..ClientConfig::new(self.backend_url.clone())
        }
    }

    /// Guard configuration for protected views.
    #[must_use]
    pub fn guard_config(&self) -> GuardConfig {
        GuardConfig {
            session_cookie: self.session_cookie.clone(),
            login_path: self.login_path.clone(),
            ..GuardConfig::default()
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: Self::default_listen_addr(),
            backend_url: Self::default_backend_url(),
            session_cookie: Self::default_session_cookie(),
            login_path: Self::default_login_path(),
            cors_origins: Self::default_cors_origins(),
            max_body_bytes: Self::default_max_body(),
            request_timeout_seconds: Self::default_request_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.session_cookie, "session");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.max_body_bytes, 64 * 1024);
    }

    #[test]
    fn deserialized_defaults_match_default() {
        let config: GatewayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.login_path, GatewayConfig::default().login_path);

        let config: GatewayConfig =
            serde_json::from_str(r#"{"cors_origins": ["http://localhost:5173"]}"#).unwrap();
        assert_eq!(config.cors_origins, vec!["http://localhost:5173".to_string()]);
    }

    #[test]
    fn timeout_duration() {
        let config = GatewayConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn derived_configs() {
        let config = GatewayConfig {
            backend_url: "http://backend:8000/".to_string(),
            session_cookie: "sid".to_string(),
            request_timeout_seconds: 10,
            ..GatewayConfig::default()
        };

        let client = config.client_config();
        assert_eq!(client.base(), "http://backend:8000");
        assert_eq!(client.request_timeout_seconds, 10);

        let guard = config.guard_config();
        assert_eq!(guard.session_cookie, "sid");
        assert_eq!(guard.protected_prefixes, vec!["/profile".to_string()]);
    }
}
