//! Resource API client.
//!
//! [`ResourceClient`] issues exactly one outbound call per operation and
//! returns either the decoded body or a [`GatewayError`]. It never retries,
//! caches, or refetches after a mutation.

use std::sync::Arc;

use reqwest::header::{HeaderValue, CONTENT_TYPE, COOKIE, SET_COOKIE};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use skillswap_core::{
    AuthResponse, LoginRequest, NewPost, NewTodo, Post, PostId, PostType, RegisterRequest, Todo,
    TodoId,
};

use crate::endpoint::{AuthEndpoint, Endpoint, PostFeed};
use crate::error::{ConfigError, GatewayError, Result};
use crate::normalize;
use crate::ClientConfig;

/// Where the session credential attached to each call comes from.
#[derive(Debug, Clone)]
enum Credentials {
    /// Cookies remembered by the client's own cookie store, like a browser.
    Ambient,
    /// No credential. Base state of a server-side client.
    Anonymous,
    /// An explicit `Cookie` header copied from an incoming request.
    Forwarded(HeaderValue),
}

/// Result of relaying a session-establishing call.
#[derive(Debug, Clone)]
pub struct RelayedAuth {
    /// Every `Set-Cookie` header of the collaborator response, untouched.
    pub set_cookies: Vec<HeaderValue>,
    /// The decoded auth body.
    pub body: AuthResponse,
    /// The collaborator's body bytes, for relaying without re-serializing.
    pub raw: Vec<u8>,
}

/// Client for the SkillSwap resource API.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    credentials: Credentials,
}

impl ResourceClient {
    /// Create a client that keeps cookies between calls.
    ///
    /// Use this where the gateway acts for a single user, the way a browser
    /// attaches its cookies to every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn ambient(config: ClientConfig) -> std::result::Result<Self, ConfigError> {
        let http = Self::build_http(&config, true)?;
        Ok(Self {
            http,
            config: Arc::new(config),
            credentials: Credentials::Ambient,
        })
    }

    /// Create a client without a cookie store, for server-side use.
    ///
    /// Calls carry no credential until [`forwarding`](Self::forwarding) is
    /// used to attach the cookie of a specific incoming request.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn server(config: ClientConfig) -> std::result::Result<Self, ConfigError> {
        let http = Self::build_http(&config, false)?;
        Ok(Self {
            http,
            config: Arc::new(config),
            credentials: Credentials::Anonymous,
        })
    }

    fn build_http(
        config: &ClientConfig,
        cookie_store: bool,
    ) -> std::result::Result<reqwest::Client, ConfigError> {
        Url::parse(config.base()).map_err(|e| ConfigError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .cookie_store(cookie_store)
            .build()?;

        Ok(http)
    }

    /// Clone this client with an explicit `Cookie` header on every call.
    ///
    /// The connection pool is shared with `self`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCookie` if the value is not a valid header.
    pub fn forwarding(&self, cookie_header: &str) -> std::result::Result<Self, ConfigError> {
        let value = HeaderValue::from_str(cookie_header).map_err(|_| ConfigError::InvalidCookie)?;
        Ok(Self {
            http: self.http.clone(),
            config: Arc::clone(&self.config),
            credentials: Credentials::Forwarded(value),
        })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns `true` if calls carry an explicitly forwarded cookie.
    #[must_use]
    pub const fn is_forwarding(&self) -> bool {
        matches!(self.credentials, Credentials::Forwarded(_))
    }

    // =========================================================================
    // Posts
    // =========================================================================

    /// List the caller's posts.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails or the body is not a post list.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.list_feed(PostFeed::Mine).await
    }

    /// List one of the post feeds.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails or the body is not a post list.
    pub async fn list_feed(&self, feed: PostFeed) -> Result<Vec<Post>> {
        let endpoint = Endpoint::Feed(feed);
        let builder = self.request(&endpoint);
        self.fetch(&endpoint, builder).await
    }

    /// Create a post.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails or the body is not a post.
    pub async fn create_post(
        &self,
        description: &str,
        category: &str,
        post_type: PostType,
        pin_code: Option<&str>,
    ) -> Result<Post> {
        let form = NewPost {
            description: description.to_string(),
            category: category.to_string(),
            post_type,
            pin_code: pin_code.map(ToString::to_string),
        };

        let endpoint = Endpoint::CreatePost;
        let builder = self.request(&endpoint).form(&form);
        self.fetch(&endpoint, builder).await
    }

    /// Replace a post with the given value.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails or the body is not a post.
    pub async fn update_post(&self, post: &Post) -> Result<Post> {
        let endpoint = Endpoint::UpdatePost;
        let builder = self.request(&endpoint).json(post);
        self.fetch(&endpoint, builder).await
    }

    /// Delete a post. The success body is ignored.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails, including when the post
    /// belongs to another user.
    pub async fn delete_post(&self, id: PostId) -> Result<()> {
        let endpoint = Endpoint::DeletePost(id);
        let builder = self.request(&endpoint);
        self.execute(&endpoint, builder).await.map(drop)
    }

    // =========================================================================
    // Legacy todos
    // =========================================================================

    /// List todos.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails or the body is not a todo list.
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let endpoint = Endpoint::ListTodos;
        let builder = self.request(&endpoint);
        self.fetch(&endpoint, builder).await
    }

    /// Create a todo.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails or the body is not a todo.
    pub async fn create_todo(&self, descript: &str, category: &str) -> Result<Todo> {
        let form = NewTodo {
            descript: descript.to_string(),
            category: category.to_string(),
        };

        let endpoint = Endpoint::CreateTodo;
        let builder = self.request(&endpoint).form(&form);
        self.fetch(&endpoint, builder).await
    }

    /// Replace a todo with the given value.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails or the body is not a todo.
    pub async fn update_todo(&self, todo: &Todo) -> Result<Todo> {
        let endpoint = Endpoint::UpdateTodo;
        let builder = self.request(&endpoint).json(todo);
        self.fetch(&endpoint, builder).await
    }

    /// Delete a todo. The success body is ignored.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails.
    pub async fn delete_todo(&self, id: TodoId) -> Result<()> {
        let endpoint = Endpoint::DeleteTodo(id);
        let builder = self.request(&endpoint);
        self.execute(&endpoint, builder).await.map(drop)
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Log in with email and password.
    ///
    /// A `200` with `success: false` is returned as-is; callers decide what
    /// it means.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails or the body is not an auth response.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let form = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let endpoint = Endpoint::Auth(AuthEndpoint::Login);
        let builder = self.request(&endpoint).form(&form);
        self.fetch(&endpoint, builder).await
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails or the body is not an auth response.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthResponse> {
        let form = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.map(ToString::to_string),
        };

        let endpoint = Endpoint::Auth(AuthEndpoint::Register);
        let builder = self.request(&endpoint).form(&form);
        self.fetch(&endpoint, builder).await
    }

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails or the body is not an auth response.
    pub async fn logout(&self) -> Result<AuthResponse> {
        let endpoint = Endpoint::Auth(AuthEndpoint::Logout);
        let builder = self.request(&endpoint);
        self.fetch(&endpoint, builder).await
    }

    /// Ask the resource API which session the attached credential belongs to.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails or the body is not an auth response.
    pub async fn check_auth(&self) -> Result<AuthResponse> {
        let endpoint = Endpoint::AuthCheck;
        let builder = self.request(&endpoint);
        self.fetch(&endpoint, builder).await
    }

    /// Forward a caller-submitted body verbatim to a login/register endpoint.
    ///
    /// The `Content-Type` is passed through unchanged so both urlencoded and
    /// multipart submissions reach the collaborator as sent. On success the
    /// collaborator's `Set-Cookie` headers are returned untouched.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the call fails or the body is not an auth response.
    pub async fn relay_auth(
        &self,
        endpoint: AuthEndpoint,
        content_type: Option<HeaderValue>,
        body: impl Into<reqwest::Body>,
    ) -> Result<RelayedAuth> {
        let endpoint = Endpoint::Auth(endpoint);
        let mut builder = self.request(&endpoint).body(body);
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }

        let response = self.execute(&endpoint, builder).await?;
        let set_cookies: Vec<HeaderValue> =
            response.headers().get_all(SET_COOKIE).iter().cloned().collect();
        let raw = response
            .bytes()
            .await
            .map_err(|e| normalize::from_transport(&e))?;
        let body = serde_json::from_slice(&raw).map_err(|e| GatewayError::decode(&e))?;

        Ok(RelayedAuth {
            set_cookies,
            body,
            raw: raw.to_vec(),
        })
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    /// Start a request for an endpoint with the credential attached.
    fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        let builder = self
            .http
            .request(endpoint.method(), self.config.url(endpoint));

        match &self.credentials {
            Credentials::Forwarded(cookie) => builder.header(COOKIE, cookie.clone()),
            Credentials::Ambient | Credentials::Anonymous => builder,
        }
    }

    /// Send a request, turning every non-2xx response into an error.
    async fn execute(&self, endpoint: &Endpoint, builder: RequestBuilder) -> Result<Response> {
        let method = endpoint.method();
        let path = endpoint.path();

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(method = %method, path = %path, error = %e, "Resource API unreachable");
            normalize::from_transport(&e)
        })?;

        let status = response.status();
        tracing::debug!(method = %method, path = %path, status = %status, "Resource API call");

        if status.is_success() {
            return Ok(response);
        }

        let error = normalize::from_response(response).await;
        tracing::warn!(
            method = %method,
            path = %path,
            status = %status,
            error = %error,
            "Resource API call failed"
        );
        Err(error)
    }

    /// Send a request and decode its 2xx body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(endpoint, builder).await?;
        Self::decode(response).await.inspect_err(|e| {
            tracing::warn!(path = %endpoint.path(), error = ?e.cause(), "Undecodable response body");
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| normalize::from_transport(&e))?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::decode(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use skillswap_core::UserId;
    use wiremock::matchers::{body_json, body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

    fn client_for(server: &MockServer) -> ResourceClient {
        ResourceClient::server(ClientConfig::new(server.uri())).unwrap()
    }

    fn sample_post() -> Post {
        Post {
            id: PostId::new(12),
            description: "Bike repair".to_string(),
            category: "repairs".to_string(),
            completed: false,
            user_id: UserId::new(3),
            post_type: PostType::Offer,
            pin_code: Some("4321".to_string()),
            user_name: Some("Ada".to_string()),
        }
    }

    /// Answers a create-post form with the post the server would store.
    struct EchoPost;

    impl Respond for EchoPost {
        fn respond(&self, request: &Request) -> ResponseTemplate {
            let body = String::from_utf8_lossy(&request.body).into_owned();
            let field = |name: &str| {
                body.split('&')
                    .filter_map(|pair| pair.split_once('='))
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.replace('+', " "))
            };

            ResponseTemplate::new(200).set_body_json(json!({
                "id": 101,
                "description": field("description"),
                "category": field("category"),
                "completed": false,
                "user_id": 3,
                "post_type": field("post_type"),
                "pin_code": field("pin_code"),
            }))
        }
    }

    #[test]
    fn invalid_base_url_rejected() {
        let result = ResourceClient::server(ClientConfig::new("not a url"));
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn forwarding_rejects_invalid_cookie() {
        let client = ResourceClient::server(ClientConfig::default()).unwrap();
        assert!(!client.is_forwarding());

        let result = client.forwarding("session=abc\n");
        assert!(matches!(result, Err(ConfigError::InvalidCookie)));

        let forwarded = client.forwarding("session=abc").unwrap();
        assert!(forwarded.is_forwarding());
    }

    #[tokio::test]
    async fn create_todo_returns_body_verbatim() {
        let server = MockServer::start().await;
        let stored = json!({
            "id": 7,
            "descript": "buy milk",
            "done": false,
            "category": "errands",
            "user_id": 3
        });

        Mock::given(method("POST"))
            .and(path("/create"))
            .and(body_string_contains("descript=buy+milk"))
            .and(body_string_contains("category=errands"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let todo = client_for(&server)
            .create_todo("buy milk", "errands")
            .await
            .unwrap();

        let expected: Todo = serde_json::from_value(stored).unwrap();
        assert_eq!(todo, expected);
        assert_eq!(todo.id, TodoId::new(7));
    }

    #[tokio::test]
    async fn create_todo_surfaces_json_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/create"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"message": "descript required"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_todo("buy milk", "errands")
            .await
            .unwrap_err();

        assert_eq!(err.message(), "descript required");
        assert_eq!(err.kind(), ErrorKind::HttpStatus(422));
    }

    #[tokio::test]
    async fn create_post_echoes_submitted_fields() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/posts/create"))
            .respond_with(EchoPost)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let cases = [
            ("Guitar lessons", "music", PostType::Offer, Some("1234")),
            ("Need a plumber", "home", PostType::Request, None),
        ];

        for (description, category, post_type, pin_code) in cases {
            let post = client
                .create_post(description, category, post_type, pin_code)
                .await
                .unwrap();

            assert_eq!(post.description, description);
            assert_eq!(post.category, category);
            assert_eq!(post.post_type, post_type);
            assert_eq!(post.pin_code.as_deref(), pin_code);
            assert!(!post.completed);
        }
    }

    #[tokio::test]
    async fn create_post_omits_absent_pin() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/posts/create"))
            .and(body_string_contains("post_type=request"))
            .respond_with(EchoPost)
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .create_post("Need a plumber", "home", PostType::Request, None)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(!body.contains("pin_code"));
    }

    #[tokio::test]
    async fn delete_foreign_post_is_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/posts/delete/9"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_string("Error: Post with id 9 not found for deletion."),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .delete_post(PostId::new(9))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::HttpStatus(404));
        assert_eq!(err.message(), "Error: Post with id 9 not found for deletion.");
    }

    #[tokio::test]
    async fn delete_ignores_success_body() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/delete/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "id": 4,
                "message": "Todo with id 4 deleted successfully."
            })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).delete_todo(TodoId::new(4)).await.unwrap();
    }

    #[tokio::test]
    async fn update_then_list_does_not_merge() {
        let server = MockServer::start().await;
        let stale = sample_post();
        let mut updated = stale.clone();
        updated.completed = true;

        Mock::given(method("POST"))
            .and(path("/posts/update"))
            .and(body_json(&updated))
            .respond_with(ResponseTemplate::new(200).set_body_json(&updated))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![&stale]))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let returned = client.update_post(&updated).await.unwrap();
        let listed = client.list_posts().await.unwrap();

        assert_eq!(returned, updated);
        assert_eq!(listed, vec![stale]);
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn feeds_use_their_paths() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/community/offers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![sample_post()]))
            .expect(1)
            .mount(&server)
            .await;

        let posts = client_for(&server)
            .list_feed(PostFeed::CommunityOffers)
            .await
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn malformed_success_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
            .mount(&server)
            .await;

        let err = client_for(&server).list_posts().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[tokio::test]
    async fn unreachable_api_is_network_error() {
        let client = ResourceClient::server(ClientConfig::new("http://127.0.0.1:1")).unwrap();

        let err = client.list_todos().await.unwrap_err();
        assert!(err.is_network());
        assert!(!err.message().is_empty());
    }

    #[tokio::test]
    async fn forwarded_cookie_is_attached() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auth/check"))
            .and(header("cookie", "session=abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Authenticated", "user_id": 5})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).forwarding("session=abc").unwrap();
        let auth = client.check_auth().await.unwrap();

        assert_eq!(auth.authenticated_user(), Some(UserId::new(5)));
    }

    #[tokio::test]
    async fn ambient_client_replays_session_cookie() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_string_contains("email=ada%40example.com"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=abc; Path=/")
                    .set_body_json(json!({"success": true, "message": "Login successful", "user_id": 5})),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/auth/check"))
            .and(header("cookie", "session=abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Authenticated", "user_id": 5})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ResourceClient::ambient(ClientConfig::new(server.uri())).unwrap();
        let login = client.login("ada@example.com", "hunter22").await.unwrap();
        assert!(login.success);

        let check = client.check_auth().await.unwrap();
        assert_eq!(check.user_id, Some(UserId::new(5)));
    }

    #[tokio::test]
    async fn relay_returns_set_cookie_untouched() {
        let server = MockServer::start().await;
        let cookie = "session=abc; HttpOnly; SameSite=None; Secure; Path=/";

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("email=a%40b.c&password=pw"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", cookie)
                    .set_body_json(json!({"success": true, "user_id": 5})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let relayed = client_for(&server)
            .relay_auth(
                AuthEndpoint::Login,
                Some(HeaderValue::from_static("application/x-www-form-urlencoded")),
                "email=a%40b.c&password=pw",
            )
            .await
            .unwrap();

        assert_eq!(relayed.set_cookies, vec![HeaderValue::from_static(cookie)]);
        assert_eq!(relayed.body.user_id, Some(UserId::new(5)));
    }

    #[tokio::test]
    async fn relay_keeps_body_bytes() {
        let server = MockServer::start().await;
        let body = r#"{"success":false,"message":"Invalid email or password","user_id":null,"attempts":3}"#;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .mount(&server)
            .await;

        let relayed = client_for(&server)
            .relay_auth(AuthEndpoint::Login, None, "email=a%40b.c&password=no")
            .await
            .unwrap();

        assert!(!relayed.body.success);
        assert_eq!(relayed.raw, body.as_bytes());
    }

    #[tokio::test]
    async fn relay_rejects_non_auth_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html>", "text/html"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .relay_auth(AuthEndpoint::Login, None, "email=a%40b.c&password=pw")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[tokio::test]
    async fn logout_posts_to_logout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/logout"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Logged out successfully"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let auth = client_for(&server).logout().await.unwrap();
        assert!(auth.success);
        assert_eq!(auth.user_id, None);
    }
}
