//! Auth-check capability and its adapters.
//!
//! A [`SessionChecker`] answers one question: which session, if any, does
//! the current credential belong to? The server adapter forwards the cookie
//! of an incoming request; the client adapter relies on the ambient cookie
//! store.

use async_trait::async_trait;

use skillswap_client::{GatewayError, ResourceClient};
use skillswap_core::AuthResponse;

/// Trait for asking the resource API about the current session.
#[async_trait]
pub trait SessionChecker: Send + Sync {
    /// Whether a credential is available at all.
    ///
    /// When this returns `false` the guard redirects without calling
    /// [`check`](Self::check).
    fn has_credential(&self) -> bool;

    /// Call the auth-check endpoint with the available credential.
    ///
    /// # Errors
    ///
    /// Returns the normalized gateway error of the auth-check call.
    async fn check(&self) -> Result<AuthResponse, GatewayError>;
}

/// Server-side checker over the session cookie of one incoming request.
#[derive(Debug, Clone)]
pub struct RequestCookieChecker {
    forwarded: Option<ResourceClient>,
}

impl RequestCookieChecker {
    /// Create a checker for a request carrying `cookie` under `cookie_name`.
    ///
    /// An absent, empty, or header-invalid cookie leaves the checker without
    /// a credential.
    #[must_use]
    pub fn new(client: &ResourceClient, cookie_name: &str, cookie: Option<&str>) -> Self {
        let forwarded = cookie
            .filter(|value| !value.is_empty())
            .and_then(|value| {
                client
                    .forwarding(&format!("{cookie_name}={value}"))
                    .map_err(|e| {
                        tracing::warn!(cookie = %cookie_name, error = %e, "Ignoring unusable session cookie");
                    })
                    .ok()
            });

        Self { forwarded }
    }
}

#[async_trait]
impl SessionChecker for RequestCookieChecker {
    fn has_credential(&self) -> bool {
        self.forwarded.is_some()
    }

    async fn check(&self) -> Result<AuthResponse, GatewayError> {
        match &self.forwarded {
            Some(client) => client.check_auth().await,
            None => Ok(AuthResponse {
                success: false,
                message: Some("Not authenticated".to_string()),
                user_id: None,
            }),
        }
    }
}

/// Client-side checker using the ambient cookie store.
#[derive(Debug, Clone)]
pub struct AmbientChecker {
    client: ResourceClient,
}

impl AmbientChecker {
    /// Create a checker over an ambient-mode client.
    #[must_use]
    pub const fn new(client: ResourceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionChecker for AmbientChecker {
    fn has_credential(&self) -> bool {
        // The cookie store is opaque; only the auth check can tell.
        true
    }

    async fn check(&self) -> Result<AuthResponse, GatewayError> {
        self.client.check_auth().await
    }
}

/// Mock checker for testing.
///
/// Returns a canned outcome, optionally after a delay, and counts calls.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug)]
pub struct MockSessionChecker {
    outcome: Result<AuthResponse, GatewayError>,
    credential: bool,
    delay: Option<std::time::Duration>,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockSessionChecker {
    /// A checker that reports an active session for `user`.
    #[must_use]
    pub fn authenticated(user: skillswap_core::UserId) -> Self {
        Self::with_outcome(Ok(AuthResponse {
            success: true,
            message: Some("Authenticated".to_string()),
            user_id: Some(user),
        }))
    }

    /// A checker that answers HTTP 200 with `success: false`.
    #[must_use]
    pub fn rejecting() -> Self {
        Self::with_outcome(Ok(AuthResponse {
            success: false,
            message: Some("Not authenticated".to_string()),
            user_id: None,
        }))
    }

    /// A checker whose call fails with `err`.
    #[must_use]
    pub fn failing(err: GatewayError) -> Self {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: Result<AuthResponse, GatewayError>) -> Self {
        Self {
            outcome,
            credential: true,
            delay: None,
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Report no credential.
    #[must_use]
    pub const fn without_credential(mut self) -> Self {
        self.credential = false;
        self
    }

    /// Wait for `delay` before answering.
    #[must_use]
    pub const fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `check` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl SessionChecker for MockSessionChecker {
    fn has_credential(&self) -> bool {
        self.credential
    }

    async fn check(&self) -> Result<AuthResponse, GatewayError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}
