//! Common error types for SkillSwap.

use thiserror::Error;

/// Core errors that can occur while handling domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A post type other than `offer` or `request` was provided.
    #[error("unknown post type: {0}")]
    UnknownPostType(String),
}
