//! Session extractor for protected views.
//!
//! [`ProtectedSession`] runs the server guard on the request's session
//! cookie. A handler taking it only runs for admitted requests; everyone
//! else gets a `307` to the login view.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::Cookie;

use skillswap_session::{Admission, SessionContext};

use crate::state::GatewayState;

/// An admitted session extracted from the request cookie.
#[derive(Debug, Clone)]
pub struct ProtectedSession {
    /// Context of the admitted user.
    pub context: SessionContext,
    /// `Cookie` header value that proved the session, for forwarding.
    pub cookie: String,
}

/// Rejection sending the visitor to the login view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRedirect(pub String);

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        Redirect::temporary(&self.0).into_response()
    }
}

impl FromRequestParts<Arc<GatewayState>> for ProtectedSession {
    type Rejection = LoginRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<GatewayState>,
    ) -> Result<Self, Self::Rejection> {
        let cookie_name = state.config.session_cookie.as_str();
        let token = session_cookie(&parts.headers, cookie_name);

        match state.guard.admit(token.as_deref()).await {
            Admission::Admit(context) => Ok(Self {
                context,
                cookie: format!("{cookie_name}={}", token.unwrap_or_default()),
            }),
            Admission::Redirect(target) => {
                tracing::debug!(path = %parts.uri.path(), target = %target, "Redirecting to login");
                Err(LoginRedirect(target))
            }
        }
    }
}

/// Value of the named cookie exactly as the browser sent it.
///
/// The token is opaque, so no percent-decoding happens here.
fn session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue, Request, StatusCode};

    #[test]
    fn session_cookie_keeps_percent_encoding() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; session=tok%3Dabc%2Bx"));

        assert_eq!(
            session_cookie(&headers, "session").as_deref(),
            Some("tok%3Dabc%2Bx")
        );
        assert_eq!(session_cookie(&headers, "other"), None);
    }

    #[test]
    fn session_cookie_searches_every_header() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("session=abc"));

        assert_eq!(session_cookie(&headers, "session").as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn missing_cookie_redirects() {
        let state = Arc::new(GatewayState::new(crate::GatewayConfig::default()).unwrap());
        let (mut parts, ()) = Request::builder()
            .uri("/profile/5")
            .body(())
            .unwrap()
            .into_parts();

        let rejection = ProtectedSession::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert_eq!(rejection, LoginRedirect("/login".to_string()));

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }
}
