//! Public views.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::GatewayState;

/// Marker for the login view.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LoginView {
    /// View name.
    pub view: &'static str,
    /// Where the login form posts.
    pub action: &'static str,
}

/// `GET /login` - the login view. Never guarded.
pub async fn login_view(State(state): State<Arc<GatewayState>>) -> Json<LoginView> {
    tracing::debug!(login_path = %state.config.login_path, "Login view");
    Json(LoginView {
        view: "login",
        action: "/api/login",
    })
}
