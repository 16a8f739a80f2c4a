//! Failure normalization.
//!
//! Converts a non-2xx response or a transport error into a [`GatewayError`].
//! The message is chosen in this order:
//!
//! 1. the `message` field of a JSON error body
//! 2. the raw response text
//! 3. the HTTP status line
//! 4. the transport error's own message
//!
//! Nothing here can fail. An unparseable body falls back to its text and an
//! unreadable body falls back to the status line.

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{ErrorKind, GatewayError};

/// Longest body excerpt kept in `cause`, in characters.
pub const MAX_EXCERPT_CHARS: usize = 512;

/// Normalize a response that arrived with a non-2xx status.
pub async fn from_response(response: reqwest::Response) -> GatewayError {
    let status = response.status();

    match response.text().await {
        Ok(body) => from_parts(status, &body),
        Err(err) => {
            let line = status_line(status);
            tracing::debug!(status = %status, error = %err, "Failed to read error body");
            GatewayError::new(
                ErrorKind::HttpStatus(status.as_u16()),
                line.clone(),
                Some(format!("HTTP {line}")),
            )
        }
    }
}

/// Normalize a transport failure where no response was received.
#[must_use]
pub fn from_transport(err: &reqwest::Error) -> GatewayError {
    GatewayError::network(err)
}

/// Normalize an already-read error response.
#[must_use]
pub fn from_parts(status: StatusCode, body: &str) -> GatewayError {
    let line = status_line(status);
    let trimmed = body.trim();

    let message = message_field(trimmed)
        .or_else(|| (!trimmed.is_empty()).then(|| trimmed.to_string()))
        .unwrap_or_else(|| line.clone());

    let cause = if trimmed.is_empty() {
        format!("HTTP {line}")
    } else {
        format!("HTTP {line}: {}", excerpt(trimmed))
    };

    GatewayError::new(ErrorKind::HttpStatus(status.as_u16()), message, Some(cause))
}

/// Extract a non-empty `message` string from a JSON object body.
#[must_use]
pub fn message_field(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(ToString::to_string)
}

/// Status line such as `422 Unprocessable Entity`.
#[must_use]
pub fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

fn excerpt(body: &str) -> String {
    if body.chars().count() <= MAX_EXCERPT_CHARS {
        body.to_string()
    } else {
        let mut cut: String = body.chars().take(MAX_EXCERPT_CHARS).collect();
        cut.push('…');
        cut
    }
}
