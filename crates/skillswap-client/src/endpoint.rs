//! Fixed operation paths of the resource API.

use reqwest::Method;
use skillswap_core::{PostId, TodoId};

/// One resource API operation, addressed by a fixed path under the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /` - list todos.
    ListTodos,
    /// `POST /create` - create a todo from a form.
    CreateTodo,
    /// `POST /update` - update a todo from JSON.
    UpdateTodo,
    /// `DELETE /delete/{id}` - delete a todo.
    DeleteTodo(TodoId),
    /// `GET` on one of the post feeds.
    Feed(PostFeed),
    /// `POST /posts/create` - create a post from a form.
    CreatePost,
    /// `POST /posts/update` - update a post from JSON.
    UpdatePost,
    /// `DELETE /posts/delete/{id}` - delete a post.
    DeletePost(PostId),
    /// An authentication endpoint.
    Auth(AuthEndpoint),
    /// `GET /auth/check` - report the session behind the attached cookie.
    AuthCheck,
}

impl Endpoint {
    /// `GET /posts` - the caller's own posts.
    pub const LIST_POSTS: Self = Self::Feed(PostFeed::Mine);

    /// Path relative to the base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::ListTodos => "/".to_string(),
            Self::CreateTodo => "/create".to_string(),
            Self::UpdateTodo => "/update".to_string(),
            Self::DeleteTodo(id) => format!("/delete/{id}"),
            Self::Feed(feed) => feed.path().to_string(),
            Self::CreatePost => "/posts/create".to_string(),
            Self::UpdatePost => "/posts/update".to_string(),
            Self::DeletePost(id) => format!("/posts/delete/{id}"),
            Self::Auth(auth) => auth.path().to_string(),
            Self::AuthCheck => "/auth/check".to_string(),
        }
    }

    /// HTTP method used for this operation.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::ListTodos | Self::Feed(_) | Self::AuthCheck => Method::GET,
            Self::CreateTodo
            | Self::UpdateTodo
            | Self::CreatePost
            | Self::UpdatePost
            | Self::Auth(_) => Method::POST,
            Self::DeleteTodo(_) | Self::DeletePost(_) => Method::DELETE,
        }
    }
}

/// Post listings exposed by the resource API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostFeed {
    /// The caller's own posts (`/posts`).
    Mine,
    /// The caller's own offers (`/posts/offers`).
    MyOffers,
    /// The caller's own requests (`/posts/requests`).
    MyRequests,
    /// Every user's posts (`/community`).
    Community,
    /// Every user's offers (`/community/offers`).
    CommunityOffers,
    /// Every user's requests (`/community/requests`).
    CommunityRequests,
}

impl PostFeed {
    /// Path relative to the base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Mine => "/posts",
            Self::MyOffers => "/posts/offers",
            Self::MyRequests => "/posts/requests",
            Self::Community => "/community",
            Self::CommunityOffers => "/community/offers",
            Self::CommunityRequests => "/community/requests",
        }
    }
}

/// Session-establishing and session-ending endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthEndpoint {
    /// `POST /auth/login`.
    Login,
    /// `POST /auth/register`.
    Register,
    /// `POST /auth/logout`.
    Logout,
}

impl AuthEndpoint {
    /// Path relative to the base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::Register => "/auth/register",
            Self::Logout => "/auth/logout",
        }
    }
}

impl From<AuthEndpoint> for Endpoint {
    fn from(auth: AuthEndpoint) -> Self {
        Self::Auth(auth)
    }
}

impl From<PostFeed> for Endpoint {
    fn from(feed: PostFeed) -> Self {
        Self::Feed(feed)
    }
}
