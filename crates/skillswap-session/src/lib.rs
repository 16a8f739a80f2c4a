//! Session guard chain for SkillSwap.
//!
//! This crate decides whether a navigation may render a protected view:
//!
//! - One admission rule ([`decide`]) shared by every guard, failing closed
//! - A [`SessionChecker`] capability with a server adapter (forwarded
//!   request cookie) and a client adapter (ambient cookie store)
//! - [`ServerGuard`] for server-rendered navigations
//! - [`ClientGuard`] for client-routed navigations, deduplicating concurrent
//!   auth checks through the shared [`AuthStore`]
//! - [`ClientSession`] for login, registration and logout
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐          ┌──────────────────┐
//! │   ServerGuard    │          │   ClientGuard    │
//! │   (per request)  │          │   (navigations)  │
//! └────────┬─────────┘          └────────┬─────────┘
//!          │                             │ single-flight
//!          │                    ┌────────▼─────────┐
//!          │                    │    AuthStore     │
//!          │                    └────────┬─────────┘
//!          │                             │
//!          └──────────────┬──────────────┘
//!                ┌────────▼─────────┐
//!                │  SessionChecker  │
//!                │  + decide()      │
//!                └────────┬─────────┘
//!                         │ GET /auth/check
//!                ┌────────▼─────────┐
//!                │  ResourceClient  │
//!                └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use skillswap_client::{ClientConfig, ResourceClient};
//! use skillswap_session::{Admission, GuardConfig, ServerGuard};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ResourceClient::server(ClientConfig::new("https://api.example.com"))?;
//! let guard = ServerGuard::new(client, GuardConfig::default());
//!
//! // In a request handler, with the request's `session` cookie:
//! match guard.admit(Some("opaque-token")).await {
//!     Admission::Admit(ctx) => println!("User: {}", ctx.user.id),
//!     Admission::Redirect(to) => println!("Redirect to {to}"),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod checker;
pub mod client;
pub mod guard;
pub mod routes;
pub mod server;
pub mod state;

use serde::Deserialize;

pub use checker::{AmbientChecker, RequestCookieChecker, SessionChecker};
pub use client::{ClientGuard, ClientSession};
pub use guard::{
    decide, evaluate, Admission, GuardPhase, Navigation, PhaseError, SessionContext, SessionUser,
};
pub use routes::RouteTable;
pub use server::ServerGuard;
pub use state::{AuthState, AuthStore};

#[cfg(any(test, feature = "test-utils"))]
pub use checker::MockSessionChecker;

/// Configuration for the session guards.
#[derive(Debug, Clone, Deserialize)]
pub struct GuardConfig {
    /// Name of the session cookie.
    #[serde(default = "GuardConfig::default_session_cookie")]
    pub session_cookie: String,

    /// Where unauthenticated visitors are sent.
    #[serde(default = "GuardConfig::default_login_path")]
    pub login_path: String,

    /// Path prefixes that require a session.
    #[serde(default = "GuardConfig::default_protected_prefixes")]
    pub protected_prefixes: Vec<String>,
}

impl GuardConfig {
    fn default_session_cookie() -> String {
        "session".to_string()
    }

    fn default_login_path() -> String {
        "/login".to_string()
    }

    fn default_protected_prefixes() -> Vec<String> {
        vec!["/profile".to_string()]
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            session_cookie: Self::default_session_cookie(),
            login_path: Self::default_login_path(),
            protected_prefixes: Self::default_protected_prefixes(),
        }
    }
}
