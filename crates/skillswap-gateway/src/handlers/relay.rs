//! Login and registration relay.
//!
//! The browser posts credentials here instead of to the resource API. The
//! body and its `Content-Type` are forwarded verbatim, and on success every
//! `Set-Cookie` of the resource API response is copied back unchanged. The
//! response body is relayed byte for byte once it checks out as an auth
//! response.
//!
//! ```text
//! POST /api/login
//! Content-Type: application/x-www-form-urlencoded
//!
//! email=ada%40example.com&password=...
//!
//! Response: 200 OK
//! Set-Cookie: session=abc; HttpOnly; Path=/
//! {"success": true, "user_id": 5}
//! ```

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};

use skillswap_client::AuthEndpoint;

use crate::error::ApiError;
use crate::state::GatewayState;

/// `POST /api/login` - relay a login submission.
///
/// # Errors
///
/// Returns `{success: false, message}` with the resource API's status, or
/// `502` when it could not be reached. No cookie is attached.
pub async fn login(
    State(state): State<Arc<GatewayState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    relay(&state, AuthEndpoint::Login, &headers, body).await
}

/// `POST /api/register` - relay a registration submission.
///
/// # Errors
///
/// Same as [`login`].
pub async fn register(
    State(state): State<Arc<GatewayState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    relay(&state, AuthEndpoint::Register, &headers, body).await
}

async fn relay(
    state: &GatewayState,
    endpoint: AuthEndpoint,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let content_type = headers.get(CONTENT_TYPE).cloned();

    let relayed = state
        .client()
        .relay_auth(endpoint, content_type, body)
        .await?;

    tracing::info!(
        endpoint = endpoint.path(),
        success = relayed.body.success,
        cookies = relayed.set_cookies.len(),
        "Relayed auth call"
    );

    let mut response = (
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        relayed.raw,
    )
        .into_response();
    for cookie in relayed.set_cookies {
        response.headers_mut().append(SET_COOKIE, cookie);
    }

    Ok(response)
}
