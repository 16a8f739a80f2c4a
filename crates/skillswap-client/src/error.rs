//! Gateway error types.
//!
//! [`GatewayError`] is the only error a gateway operation ever returns. Its
//! [`ErrorKind`] tells the three failure shapes apart; `message` is always
//! fit for inline display.

use std::fmt;

use thiserror::Error;

/// A result type using `GatewayError`.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Classification of a failed gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No response was received.
    Network,
    /// A response was received with a non-2xx status.
    HttpStatus(u16),
    /// A 2xx response body did not match the expected shape.
    Decode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network"),
            Self::HttpStatus(code) => write!(f, "http {code}"),
            Self::Decode => f.write_str("decode"),
        }
    }
}

/// Normalized error returned by every failed gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    kind: ErrorKind,
    message: String,
    cause: Option<String>,
}

impl GatewayError {
    /// Build an error from its parts.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>, cause: Option<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause,
        }
    }

    /// A transport failure: the request never produced a response.
    #[must_use]
    pub fn network(err: &reqwest::Error) -> Self {
        let cause = std::error::Error::source(err).map(ToString::to_string);
        Self::new(ErrorKind::Network, err.to_string(), cause)
    }

    /// A 2xx body that failed to decode.
    #[must_use]
    pub fn decode(err: &serde_json::Error) -> Self {
        Self::new(
            ErrorKind::Decode,
            "response body did not match the expected shape",
            Some(err.to_string()),
        )
    }

    /// Failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message for inline display.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostic detail: status line and body excerpt, or the source error.
    #[must_use]
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// The HTTP status code, for `HttpStatus` errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::HttpStatus(code) => Some(code),
            ErrorKind::Network | ErrorKind::Decode => None,
        }
    }

    /// Returns `true` if no response was received.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self.kind, ErrorKind::Network)
    }
}

/// Errors raised while constructing a client, before any call is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured base address is not an absolute URL.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A forwarded cookie contains bytes not allowed in a header.
    #[error("invalid cookie header value")]
    InvalidCookie,

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_message() {
        let err = GatewayError::new(
            ErrorKind::HttpStatus(422),
            "descript required",
            Some("HTTP 422 Unprocessable Entity".to_string()),
        );
        assert_eq!(err.to_string(), "descript required");
        assert_eq!(err.status(), Some(422));
        assert!(!err.is_network());
    }

    #[test]
    fn decode_error_has_no_status() {
        let json_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = GatewayError::decode(&json_err);
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.status(), None);
        assert!(err.cause().is_some());
    }

    #[test]
    fn kind_display() {
        assert_eq!(ErrorKind::Network.to_string(), "network");
        assert_eq!(ErrorKind::HttpStatus(404).to_string(), "http 404");
        assert_eq!(ErrorKind::Decode.to_string(), "decode");
    }
}
