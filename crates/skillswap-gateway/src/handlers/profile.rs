//! Guarded profile views.
//!
//! Both handlers take a [`ProtectedSession`], so they only run for admitted
//! requests.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use skillswap_core::{Post, UserId};
use skillswap_session::{SessionContext, SessionUser};

use crate::auth::ProtectedSession;
use crate::error::ApiError;
use crate::state::GatewayState;

/// Profile page data with the owner's posts.
#[derive(Debug, Serialize)]
pub struct ProfilePosts {
    /// The authenticated user.
    pub user: SessionUser,
    /// The user's posts.
    pub posts: Vec<Post>,
}

/// `GET /profile/{userid}` - the session context of the admitted user.
///
/// ```text
/// Response: 200 OK
/// {"user": {"id": 5}}
/// ```
pub async fn profile(
    session: ProtectedSession,
    Path(userid): Path<UserId>,
) -> Json<SessionContext> {
    tracing::debug!(requested = %userid, user_id = %session.context.user.id, "Profile view");
    Json(session.context)
}

/// `GET /profile/{userid}/posts` - the admitted user's posts.
///
/// The posts are fetched server-side with the request's cookie forwarded.
///
/// # Errors
///
/// Returns the mapped resource API failure as `{success: false, message}`.
pub async fn profile_posts(
    State(state): State<Arc<GatewayState>>,
    session: ProtectedSession,
    Path(userid): Path<UserId>,
) -> Result<Json<ProfilePosts>, ApiError> {
    tracing::debug!(requested = %userid, user_id = %session.context.user.id, "Profile posts view");

    let posts = state
        .client()
        .forwarding(&session.cookie)?
        .list_posts()
        .await?;

    Ok(Json(ProfilePosts {
        user: session.context.user,
        posts,
    }))
}
