//! Core types for the SkillSwap gateway.
//!
//! This crate provides the domain types shared by the client, session and
//! gateway crates:
//!
//! - **Identifiers**: strongly-typed ids for users, posts, todos and navigations
//! - **Models**: `Post`, `Todo` and the auth payloads exchanged with the resource API
//! - **Error types**: parse errors shared across crates
//!
//! # Example
//!
//! ```
//! use skillswap_core::{PostId, PostType, UserId};
//!
//! let owner: UserId = "3".parse().unwrap();
//! let post_id = PostId::new(7);
//! let kind: PostType = "offer".parse().unwrap();
//!
//! assert_eq!(owner.get(), 3);
//! assert_eq!(post_id.to_string(), "7");
//! assert_eq!(kind, PostType::Offer);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod models;

pub use error::CoreError;
pub use ids::{IdError, NavigationId, PostId, TodoId, UserId};
pub use models::{
    AuthResponse, LoginRequest, NewPost, NewTodo, Post, PostType, RegisterRequest, Todo,
};
