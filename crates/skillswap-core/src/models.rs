//! Domain models exchanged with the resource API.
//!
//! These types mirror the collaborator's wire shapes exactly. Success bodies
//! are decoded into them strictly: a missing required field is a decode
//! failure, never a defaulted value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ids::{PostId, TodoId, UserId};

/// Whether a post offers a skill or asks for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    /// The author offers a skill.
    Offer,
    /// The author requests a skill.
    Request,
}

impl PostType {
    /// Wire representation used in forms and JSON bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Offer => "offer",
            Self::Request => "request",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offer" => Ok(Self::Offer),
            "request" => Ok(Self::Request),
            other => Err(CoreError::UnknownPostType(other.to_string())),
        }
    }
}

/// A user-authored offer or request in the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned identifier.
    pub id: PostId,
    /// Free-text description, non-empty.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Whether the post has been completed.
    pub completed: bool,
    /// Owner. Immutable after creation.
    pub user_id: UserId,
    /// Offer or request.
    pub post_type: PostType,
    /// PIN gating completion of an offer. Only the resource API checks it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_code: Option<String>,
    /// Display name of the owner, populated by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Form body for creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    /// Free-text description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Offer or request.
    pub post_type: PostType,
    /// Optional completion PIN, omitted from the form when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_code: Option<String>,
}

/// Legacy todo shape, kept for backward-compatible call sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned identifier.
    pub id: TodoId,
    /// Description text.
    pub descript: String,
    /// Completion flag.
    pub done: bool,
    /// Category label.
    pub category: String,
    /// Owner.
    pub user_id: UserId,
}

/// Form body for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    /// Description text.
    pub descript: String,
    /// Category label.
    pub category: String,
}

/// Body returned by the login, register, logout and auth-check endpoints.
///
/// Optional fields are omitted when re-serialized so a relayed body keeps
/// the collaborator's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Whether the operation succeeded. HTTP 200 with `false` is a failure.
    pub success: bool,
    /// Human-readable status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Authenticated user, present on successful login or check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl AuthResponse {
    /// The authenticated user, if this response proves an active session.
    #[must_use]
    pub fn authenticated_user(&self) -> Option<UserId> {
        if self.success {
            self.user_id
        } else {
            None
        }
    }
}

/// Form body for email/password login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// User's email address.
    pub email: String,
    /// User's password.
    pub password: String,
}

/// Form body for registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// User's email address.
    pub email: String,
    /// User's password.
    pub password: String,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
