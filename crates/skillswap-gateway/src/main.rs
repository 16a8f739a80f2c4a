//! SkillSwap Gateway - session-guarded HTTP gateway
//!
//! This is the main entry point for the gateway service.
//!
//! # Environment
//!
//! - `LISTEN_ADDR` - bind address (default `0.0.0.0:3000`)
//! - `BACKEND_URL` - resource API base address (default `http://localhost:8000`)
//! - `SESSION_COOKIE` - session cookie name (default `session`)
//! - `LOGIN_PATH` - login view path (default `/login`)
//! - `CORS_ORIGINS` - comma-separated allowed origins (default `*`)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skillswap_gateway::{create_router, GatewayConfig, GatewayState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,skillswap=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SkillSwap Gateway");

    // Load configuration from environment
    let defaults = GatewayConfig::default();
    let config = GatewayConfig {
        listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
        backend_url: std::env::var("BACKEND_URL").unwrap_or(defaults.backend_url),
        session_cookie: std::env::var("SESSION_COOKIE").unwrap_or(defaults.session_cookie),
        login_path: std::env::var("LOGIN_PATH").unwrap_or(defaults.login_path),
        cors_origins: std::env::var("CORS_ORIGINS").map_or(defaults.cors_origins, |raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(ToString::to_string)
                .collect()
        }),
        ..defaults
    };

    tracing::info!(
        listen_addr = %config.listen_addr,
        backend_url = %config.backend_url,
        session_cookie = %config.session_cookie,
        login_path = %config.login_path,
        cors_origins = ?config.cors_origins,
        "Gateway configuration loaded"
    );

    let listen_addr = config.listen_addr.clone();
    let state = GatewayState::new(config)?;

    let app = create_router(state);
    tracing::info!("Router configured");

    // Start HTTP server
    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
