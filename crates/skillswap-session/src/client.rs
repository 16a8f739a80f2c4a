//! Client-side guard and session operations.
//!
//! [`ClientGuard`] guards client-routed navigations through the shared
//! [`AuthStore`]. [`ClientSession`] performs login, registration and logout
//! and records their completion in the same store.

use std::sync::Arc;

use futures::FutureExt;
use parking_lot::Mutex;

use skillswap_client::{ResourceClient, Result};
use skillswap_core::{AuthResponse, NavigationId};

use crate::checker::{AmbientChecker, SessionChecker};
use crate::guard::{evaluate, Navigation};
use crate::routes::RouteTable;
use crate::state::AuthStore;

/// Guards client-routed navigations.
pub struct ClientGuard {
    store: AuthStore,
    checker: Arc<dyn SessionChecker>,
    routes: RouteTable,
    latest: Mutex<Option<NavigationId>>,
}

impl ClientGuard {
    /// Create a guard over `checker` that shares state through `store`.
    #[must_use]
    pub fn new(store: AuthStore, checker: Arc<dyn SessionChecker>, routes: RouteTable) -> Self {
        Self {
            store,
            checker,
            routes,
            latest: Mutex::new(None),
        }
    }

    /// Guard a navigation to `path`.
    ///
    /// Public paths resolve at once as `Unguarded`. Protected paths join the
    /// pending auth check, or start one, and resolve from its result.
    pub async fn navigate(&self, path: &str) -> Navigation {
        if !self.routes.is_protected(path) {
            let nav = Navigation::unguarded(path);
            *self.latest.lock() = Some(nav.id());
            return nav;
        }

        let mut nav = Navigation::protected(path);
        *self.latest.lock() = Some(nav.id());

        let checker = Arc::clone(&self.checker);
        let login_path = self.routes.login_path().to_string();
        let check = self
            .store
            .check_shared(move || async move { evaluate(checker.as_ref(), &login_path).await }.boxed());

        let started = nav.begin_check();
        let admission = check.await;

        if let Err(err) = started.and_then(|()| nav.resolve(admission)) {
            tracing::error!(navigation = %nav.id(), error = %err, "Navigation left unresolved");
        }

        tracing::debug!(
            navigation = %nav.id(),
            path = %nav.path(),
            phase = %nav.phase(),
            "Navigation guarded"
        );
        nav
    }

    /// Returns `true` if `nav` is the most recent navigation.
    ///
    /// Results of an abandoned navigation should be discarded.
    #[must_use]
    pub fn is_current(&self, nav: &Navigation) -> bool {
        *self.latest.lock() == Some(nav.id())
    }

    /// The shared auth state.
    #[must_use]
    pub const fn store(&self) -> &AuthStore {
        &self.store
    }

    /// The route table in use.
    #[must_use]
    pub const fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

impl std::fmt::Debug for ClientGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientGuard")
            .field("store", &self.store)
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}

/// Login, registration and logout for the browser-side session.
#[derive(Debug, Clone)]
pub struct ClientSession {
    client: ResourceClient,
    store: AuthStore,
}

impl ClientSession {
    /// Create a session over an ambient-mode client.
    #[must_use]
    pub const fn new(client: ResourceClient, store: AuthStore) -> Self {
        Self { client, store }
    }

    /// A guard that checks through this session's client and store.
    #[must_use]
    pub fn guard(&self, routes: RouteTable) -> ClientGuard {
        let checker: Arc<dyn SessionChecker> = Arc::new(AmbientChecker::new(self.client.clone()));
        ClientGuard::new(self.store.clone(), checker, routes)
    }

    /// Log in. A response proving a session marks the store authenticated.
    ///
    /// # Errors
    ///
    /// Returns the gateway error of the login call; the store is unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let auth = self.client.login(email, password).await?;
        self.record(&auth);
        Ok(auth)
    }

    /// Register. A response proving a session marks the store authenticated.
    ///
    /// # Errors
    ///
    /// Returns the gateway error of the register call; the store is unchanged.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthResponse> {
        let auth = self.client.register(email, password, name).await?;
        self.record(&auth);
        Ok(auth)
    }

    /// Log out and clear the store.
    ///
    /// # Errors
    ///
    /// Returns the gateway error of the logout call; the store is unchanged.
    pub async fn logout(&self) -> Result<AuthResponse> {
        let auth = self.client.logout().await?;
        self.store.record_logout();
        tracing::info!("Logged out");
        Ok(auth)
    }

    fn record(&self, auth: &AuthResponse) {
        match auth.authenticated_user() {
            Some(user) => {
                self.store.record_login(user);
                tracing::info!(user_id = %user, "Session established");
            }
            None => {
                tracing::info!(message = ?auth.message, "Session not established");
            }
        }
    }

    /// The underlying client.
    #[must_use]
    pub const fn client(&self) -> &ResourceClient {
        &self.client
    }

    /// The shared auth state.
    #[must_use]
    pub const fn store(&self) -> &AuthStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::MockSessionChecker;
    use crate::guard::{GuardPhase, SessionContext};
    use serde_json::json;
    use skillswap_client::{ClientConfig, ErrorKind, GatewayError};
    use skillswap_core::UserId;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn guard_with(checker: Arc<MockSessionChecker>) -> ClientGuard {
        ClientGuard::new(AuthStore::new(), checker, RouteTable::default())
    }

    #[tokio::test]
    async fn public_path_skips_check() {
        let checker = Arc::new(MockSessionChecker::rejecting());
        let guard = guard_with(Arc::clone(&checker));

        let nav = guard.navigate("/login").await;

        assert_eq!(nav.phase(), &GuardPhase::Unguarded);
        assert!(nav.may_render());
        assert_eq!(checker.calls(), 0);
    }

    #[tokio::test]
    async fn protected_path_admits() {
        let checker = Arc::new(MockSessionChecker::authenticated(UserId::new(5)));
        let guard = guard_with(Arc::clone(&checker));

        let nav = guard.navigate("/profile/5").await;

        assert_eq!(
            nav.phase(),
            &GuardPhase::Admitted(SessionContext::for_user(UserId::new(5)))
        );
        assert_eq!(guard.store().snapshot().user_id, Some(UserId::new(5)));
    }

    #[tokio::test]
    async fn network_failure_redirects() {
        let checker = Arc::new(MockSessionChecker::failing(GatewayError::new(
            ErrorKind::Network,
            "connection refused",
            None,
        )));
        let guard = guard_with(checker);

        let nav = guard.navigate("/profile").await;

        assert_eq!(nav.redirect_target(), Some("/login"));
        assert!(!guard.store().snapshot().is_authenticated);
    }

    #[tokio::test]
    async fn concurrent_navigations_share_one_check() {
        let checker = Arc::new(
            MockSessionChecker::authenticated(UserId::new(8)).with_delay(Duration::from_millis(50)),
        );
        let guard = guard_with(Arc::clone(&checker));

        let (a, b) = tokio::join!(guard.navigate("/profile/8"), guard.navigate("/profile/8/posts"));

        assert_eq!(checker.calls(), 1);
        assert_eq!(a.context(), b.context());
        assert!(a.context().is_some());
        assert!(!guard.store().snapshot().loading);
    }

    #[tokio::test]
    async fn latest_navigation_is_current() {
        let checker = Arc::new(MockSessionChecker::authenticated(UserId::new(1)));
        let guard = guard_with(checker);

        let first = guard.navigate("/profile/1").await;
        assert!(guard.is_current(&first));

        let second = guard.navigate("/").await;
        assert!(!guard.is_current(&first));
        assert!(guard.is_current(&second));
    }

    #[tokio::test]
    async fn login_during_pending_check_is_kept() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Login successful",
                "user_id": 4
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ResourceClient::ambient(ClientConfig::new(server.uri())).unwrap();
        let session = ClientSession::new(client, AuthStore::new());

        let checker = Arc::new(MockSessionChecker::rejecting().with_delay(Duration::from_millis(100)));
        let guard = ClientGuard::new(session.store().clone(), checker, RouteTable::default());

        let (nav, login) = tokio::join!(guard.navigate("/profile"), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            session.login("ada@example.com", "pw").await
        });

        assert!(login.unwrap().success);
        assert_eq!(nav.redirect_target(), Some("/login"));

        let state = session.store().snapshot();
        assert!(state.is_authenticated);
        assert_eq!(state.user_id, Some(UserId::new(4)));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn session_login_then_guarded_navigation() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=abc; Path=/")
                    .set_body_json(json!({"success": true, "user_id": 6})),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/auth/check"))
            .and(header("cookie", "session=abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "user_id": 6})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ResourceClient::ambient(ClientConfig::new(server.uri())).unwrap();
        let session = ClientSession::new(client, AuthStore::new());
        session.login("ada@example.com", "pw").await.unwrap();

        let guard = session.guard(RouteTable::default());
        let nav = guard.navigate("/profile/6").await;

        assert_eq!(nav.context().map(|c| c.user.id), Some(UserId::new(6)));
    }

    #[tokio::test]
    async fn failed_login_leaves_store_untouched() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "Invalid credentials"
            })))
            .mount(&server)
            .await;

        let client = ResourceClient::ambient(ClientConfig::new(server.uri())).unwrap();
        let session = ClientSession::new(client, AuthStore::new());

        let auth = session.login("ada@example.com", "wrong").await.unwrap();
        assert!(!auth.success);
        assert!(!session.store().snapshot().is_authenticated);
    }

    #[tokio::test]
    async fn logout_clears_store() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "user_id": 2})))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/logout"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let client = ResourceClient::ambient(ClientConfig::new(server.uri())).unwrap();
        let session = ClientSession::new(client, AuthStore::new());

        session.register("bo@example.com", "pw", Some("Bo")).await.unwrap();
        assert!(session.store().snapshot().is_authenticated);

        session.logout().await.unwrap();
        assert!(!session.store().snapshot().is_authenticated);
    }
}
