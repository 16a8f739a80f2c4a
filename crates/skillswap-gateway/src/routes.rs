//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, profile, relay, views};
use crate::state::GatewayState;

/// Create the gateway router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Liveness
/// - `GET /login` - Login view (path follows `login_path`)
/// - `POST /api/login` - Relay a login to the resource API
/// - `POST /api/register` - Relay a registration to the resource API
///
/// ## Protected (session cookie)
/// - `GET /profile/{userid}` - Session context
/// - `GET /profile/{userid}/posts` - Session context and the user's posts
pub fn create_router(state: GatewayState) -> Router {
    // Extract config values before moving state
    let login_path = state.config.login_path.clone();
    let cors = build_cors_layer(&state.config.cors_origins);
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout = state.config.request_timeout();

    let state = Arc::new(state);

    Router::new()
        // Public
        .route("/health", get(health::health))
        .route(&login_path, get(views::login_view))
        .route("/api/login", post(relay::login))
        .route("/api/register", post(relay::register))
        // Protected
        .route("/profile/{userid}", get(profile::profile))
        .route("/profile/{userid}/posts", get(profile::profile_posts))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
///
/// Explicit origins allow credentials so the browser sends the session
/// cookie; a wildcard cannot.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE])
            .allow_credentials(true)
    }
}
