//! Server-side guard for server-rendered navigations.

use std::sync::Arc;

use skillswap_client::ResourceClient;

use crate::checker::RequestCookieChecker;
use crate::guard::{evaluate, Admission};
use crate::GuardConfig;

/// Guards one incoming request using its session cookie.
#[derive(Debug, Clone)]
pub struct ServerGuard {
    client: ResourceClient,
    config: Arc<GuardConfig>,
}

impl ServerGuard {
    /// Create a guard over a server-mode client.
    #[must_use]
    pub fn new(client: ResourceClient, config: GuardConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    /// Decide whether a request carrying `cookie` may see a protected view.
    ///
    /// `cookie` is the value of the session cookie, if the request had one.
    /// Without it no call is made.
    pub async fn admit(&self, cookie: Option<&str>) -> Admission {
        let checker = RequestCookieChecker::new(&self.client, &self.config.session_cookie, cookie);
        let admission = evaluate(&checker, &self.config.login_path).await;

        match &admission {
            Admission::Admit(ctx) => {
                tracing::info!(user_id = %ctx.user.id, "Session admitted");
            }
            Admission::Redirect(target) => {
                tracing::info!(target = %target, had_cookie = cookie.is_some(), "Session redirected");
            }
        }

        admission
    }

    /// The client used for auth checks.
    #[must_use]
    pub const fn client(&self) -> &ResourceClient {
        &self.client
    }

    /// Guard configuration.
    #[must_use]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }
}
