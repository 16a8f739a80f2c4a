//! Typed resource gateway for the SkillSwap API.
//!
//! Every outbound call to the resource API goes through [`ResourceClient`]:
//!
//! - Request construction against fixed, per-operation [`Endpoint`] paths
//! - Credential attachment (ambient cookie store or an explicit `Cookie` header)
//! - Strict decoding of success bodies
//! - Normalization of every failure into a [`GatewayError`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │  Session guard   │────▶│  ResourceClient  │
//! │  / UI call sites │     │  (chokepoint)    │
//! └──────────────────┘     └────────┬─────────┘
//!                                   │
//!                          ┌────────▼─────────┐
//!                          │  normalize       │
//!                          │  (error shapes)  │
//!                          └────────┬─────────┘
//!                                   │ HTTPS
//!                          ┌────────▼─────────┐
//!                          │  Resource API    │
//!                          └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use skillswap_client::{ClientConfig, ResourceClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ResourceClient::ambient(ClientConfig::new("https://api.example.com"))?;
//!
//! let auth = client.login("user@example.com", "secret").await?;
//! if auth.success {
//!     for post in client.list_posts().await? {
//!         println!("{} ({})", post.description, post.post_type);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod endpoint;
pub mod error;
pub mod normalize;

use std::time::Duration;

use serde::Deserialize;

pub use client::{RelayedAuth, ResourceClient};
pub use endpoint::{AuthEndpoint, Endpoint, PostFeed};
pub use error::{ConfigError, ErrorKind, GatewayError, Result};

/// Configuration for reaching the resource API.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base address of the resource API (e.g., `https://api.example.com`).
    pub base_url: String,

    /// Total request timeout in seconds.
    #[serde(default = "ClientConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Connection timeout in seconds.
    #[serde(default = "ClientConfig::default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl ClientConfig {
    /// Create a configuration for the given base address with default timeouts.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_seconds: Self::default_request_timeout(),
            connect_timeout_seconds: Self::default_connect_timeout(),
        }
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    const fn default_connect_timeout() -> u64 {
        5
    }

    /// Base address without a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Full URL for an endpoint.
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base(), endpoint.path())
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get the connect timeout as a `Duration`.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
