//! API error types and responses.
//!
//! Every failure leaves the gateway as `{"success": false, "message": ...}`,
//! the same shape the resource API uses for auth failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use skillswap_client::{ConfigError, ErrorKind, GatewayError};

/// API error type that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A call to the resource API failed.
    #[error("{0}")]
    Gateway(#[from] GatewayError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
}

impl ApiError {
    /// Get the HTTP status code for this error.
    ///
    /// Resource API statuses pass through; failures with no usable status
    /// become `502 Bad Gateway`.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Gateway(err) => match err.kind() {
                ErrorKind::HttpStatus(code) => {
                    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY)
                }
                ErrorKind::Network | ErrorKind::Decode => StatusCode::BAD_GATEWAY,
            },
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Gateway(err) => match err.kind() {
                ErrorKind::Network => "upstream_unreachable",
                ErrorKind::HttpStatus(_) => "upstream_status",
                ErrorKind::Decode => "upstream_decode",
            },
            Self::Internal(_) => "internal_error",
        }
    }

    /// Message shown to the caller.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Gateway(err) => err.message().to_string(),
            Self::Internal(_) => "internal error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(code = self.code(), status = %status, error = %self, "Request failed");

        let body = ErrorResponse {
            success: false,
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!(error = %err, "Client configuration error");
        Self::Internal(err.to_string())
    }
}
