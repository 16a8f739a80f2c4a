//! Identifier types for SkillSwap.
//!
//! Users, posts and todos are identified by the integer keys the resource API
//! assigns. Navigations are tagged client-side with a random UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a server-assigned integer identifier.
macro_rules! server_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw identifier returned by the resource API.
            #[must_use]
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            /// Return the raw integer value.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i32>()
                    .map(Self)
                    .map_err(|_| IdError::InvalidInteger(s.to_string()))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }
    };
}

server_id! {
    /// A user identifier, as reported by the auth endpoints in `user_id`.
    UserId
}

server_id! {
    /// A post identifier, assigned by the resource API on creation.
    PostId
}

server_id! {
    /// A legacy todo identifier.
    TodoId
}

/// Identifies a single navigation through the session guard.
///
/// Results produced for a navigation that has since been superseded are
/// discarded by comparing ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationId(uuid::Uuid);

impl NavigationId {
    /// Generate a new random `NavigationId`.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl FromStr for NavigationId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = uuid::Uuid::parse_str(s).map_err(|_| IdError::InvalidUuid)?;
        Ok(Self(uuid))
    }
}

impl fmt::Debug for NavigationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NavigationId({})", self.0)
    }
}

impl fmt::Display for NavigationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not a valid 32-bit integer.
    #[error("invalid integer id: {0:?}")]
    InvalidInteger(String),

    /// The input is not a valid UUID.
    #[error("invalid UUID format")]
    InvalidUuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_parse() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:?}"), "UserId(42)");
    }

    #[test]
    fn post_id_rejects_garbage() {
        let result = "abc".parse::<PostId>();
        assert_eq!(result, Err(IdError::InvalidInteger("abc".to_string())));
    }

    #[test]
    fn ids_serialize_as_plain_integers() {
        let json = serde_json::to_string(&PostId::new(7)).unwrap();
        assert_eq!(json, "7");

        let parsed: TodoId = serde_json::from_str("11").unwrap();
        assert_eq!(parsed, TodoId::new(11));
    }

    #[test]
    fn navigation_ids_are_unique() {
        let a = NavigationId::generate();
        let b = NavigationId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn navigation_id_display_parses_back() {
        let id = NavigationId::generate();
        assert_eq!(id.to_string().parse::<NavigationId>(), Ok(id));
    }

    #[test]
    fn navigation_id_invalid() {
        let result = NavigationId::from_str("not-a-uuid");
        assert!(matches!(result, Err(IdError::InvalidUuid)));
    }
}
