//! Session-guarded HTTP gateway for the SkillSwap web app.
//!
//! This crate sits between the browser and the resource API. It handles:
//!
//! - Relaying login and registration so the session cookie reaches the browser
//! - Server-side session checks for protected views
//! - Server-side resource loads with the caller's cookie forwarded
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Browser                              │
//! │                  (session cookie store)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    skillswap-gateway                         │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐   │
//! │  │  Protected  │ │   Router    │ │    Login/Register   │   │
//! │  │  Session    │ │  + Handlers │ │    Relay            │   │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                    ┌──────────────────┐
//!                    │   Resource API   │
//!                    └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use skillswap_gateway::{create_router, GatewayConfig, GatewayState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::default();
//! let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
//!
//! let app = create_router(GatewayState::new(config)?);
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::GatewayState;
