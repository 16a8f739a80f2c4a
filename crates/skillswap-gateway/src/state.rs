//! Gateway application state.
//!
//! This module defines the shared state that is available to all request handlers.

use skillswap_client::{ConfigError, ResourceClient};
use skillswap_session::ServerGuard;

use crate::config::GatewayConfig;

/// Shared application state for the gateway.
#[derive(Debug, Clone)]
pub struct GatewayState {
    /// Guard for protected views. Owns the server-mode resource client.
    pub guard: ServerGuard,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl GatewayState {
    /// Create a new gateway state.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        let client = ResourceClient::server(config.client_config())?;
        let guard = ServerGuard::new(client, config.guard_config());

        Ok(Self { guard, config })
    }

    /// The server-mode client used for relayed and guarded calls.
    #[must_use]
    pub const fn client(&self) -> &ResourceClient {
        self.guard.client()
    }
}
