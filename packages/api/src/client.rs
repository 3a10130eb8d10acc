//! HTTP implementation of [`FeedBackend`].

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{
    AccessToken, Credentials, FeedConfig, InteractionKind, InteractionRequest, Post, PostId, User,
};

use crate::error::ApiError;
use crate::forms::PostDraft;
use crate::FeedBackend;

/// Client for the feed API rooted at a fixed base URL.
///
/// No retries, timeouts or caching: every call is one request.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/posts/3`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Where the server serves a stored post image.
    pub fn image_url(&self, image_path: &str) -> String {
        self.url(image_path)
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        tracing::debug!("{method} {path}");
        let builder = self.http.request(method, self.url(path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("Request failed: {e}");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), &body);
        tracing::warn!("Server answered {status}: {err}");
        Err(err)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        self.send(builder)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn fetch_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send(builder).await?;
        Ok(())
    }
}

impl FeedBackend for ApiClient {
    async fn register(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let builder = self
            .request(Method::POST, "/users/register", None)
            .json(credentials);
        self.fetch_json(builder).await
    }

    async fn issue_token(&self, credentials: &Credentials) -> Result<AccessToken, ApiError> {
        let builder = self
            .request(Method::POST, "/users/token", None)
            .form(credentials);
        self.fetch_json(builder).await
    }

    async fn list_posts(&self, token: &str) -> Result<Vec<Post>, ApiError> {
        self.fetch_json(self.request(Method::GET, "/posts", Some(token)))
            .await
    }

    async fn get_post(&self, token: &str, id: PostId) -> Result<Post, ApiError> {
        self.fetch_json(self.request(Method::GET, &format!("/posts/{id}"), Some(token)))
            .await
    }

    async fn create_post(&self, token: &str, draft: &PostDraft) -> Result<Post, ApiError> {
        let builder = self
            .request(Method::POST, "/posts", Some(token))
            .multipart(draft.to_form()?);
        self.fetch_json(builder).await
    }

    async fn update_post(&self, token: &str, id: PostId, draft: &PostDraft) -> Result<Post, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/posts/{id}"), Some(token))
            .multipart(draft.to_form()?);
        self.fetch_json(builder).await
    }

    async fn delete_post(&self, token: &str, id: PostId) -> Result<(), ApiError> {
        self.fetch_empty(self.request(Method::DELETE, &format!("/posts/{id}"), Some(token)))
            .await
    }

    async fn interact(&self, token: &str, id: PostId, kind: InteractionKind) -> Result<(), ApiError> {
        let builder = self
            .request(
                Method::POST,
                &format!("/interactions/posts/{id}"),
                Some(token),
            )
            .json(&InteractionRequest { kind });
        self.fetch_empty(builder).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::forms::ImageUpload;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, body_string_contains, header, method, path};
    use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

    struct NoAuthorization;

    impl Match for NoAuthorization {
        fn matches(&self, request: &Request) -> bool {
            !request.headers.contains_key("authorization")
        }
    }

    struct WithoutImagePart;

    impl Match for WithoutImagePart {
        fn matches(&self, request: &Request) -> bool {
            !String::from_utf8_lossy(&request.body).contains("name=\"image\"")
        }
    }

    fn post_json(id: i64, image_path: Option<&str>) -> serde_json::Value {
        json!({
            "id": id,
            "content": "hello",
            "image_path": image_path,
            "author": {"id": 1, "username": "ana"},
            "interactions": [
                {"id": 9, "type": "like", "user": {"id": 2, "username": "bruno"}}
            ]
        })
    }

    #[test]
    fn test_urls() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/posts/3"), "http://localhost:8000/posts/3");
        assert_eq!(
            client.image_url("static/images/1_cat.png"),
            "http://localhost:8000/static/images/1_cat.png"
        );

        let configured = ApiClient::from_config(&FeedConfig::default());
        assert_eq!(configured.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_list_posts_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([post_json(1, None)])))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let posts = client.list_posts("tok").await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author.username, "ana");
        assert_eq!(posts[0].interactions[0].kind, InteractionKind::Like);
    }

    #[tokio::test]
    async fn test_issue_token_is_form_encoded_and_anonymous() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("username=ana&password=s3cret"))
            .and(NoAuthorization)
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": "jwt", "token_type": "bearer"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let token = client
            .issue_token(&Credentials::new("ana", "s3cret"))
            .await
            .unwrap();
        assert_eq!(token.access_token, "jwt");
    }

    #[tokio::test]
    async fn test_register_posts_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/register"))
            .and(body_json(json!({"username": "ana", "password": "s3cret"})))
            .and(NoAuthorization)
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5, "username": "ana"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let user = client
            .register(&Credentials::new("ana", "s3cret"))
            .await
            .unwrap();
        assert_eq!(user.id, 5);
    }

    #[tokio::test]
    async fn test_server_detail_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/register"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"detail": "Username already exists"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client
            .register(&Credentials::new("ana", "x"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.detail(), Some("Username already exists"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Nothing listens on port 9 (discard) in the test environment.
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.list_posts("tok").await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.detail().is_none());
    }

    #[tokio::test]
    async fn test_undecodable_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client.get_post("tok", 1).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_create_post_sends_multipart_with_image() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .and(header("authorization", "Bearer tok"))
            .and(body_string_contains("name=\"content\""))
            .and(body_string_contains("name=\"image\"; filename=\"cat.png\""))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(post_json(4, Some("static/images/1_cat.png"))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let draft = PostDraft::new("hello")
            .with_image(ImageUpload::new("cat.png", vec![0x89, b'P', b'N', b'G']).unwrap());
        let post = client.create_post("tok", &draft).await.unwrap();
        assert_eq!(post.image_path.as_deref(), Some("static/images/1_cat.png"));
    }

    #[tokio::test]
    async fn test_update_without_new_image_omits_image_part() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/posts/4"))
            .and(body_string_contains("edited"))
            .and(WithoutImagePart)
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(post_json(4, Some("static/images/1_cat.png"))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let mut draft = PostDraft::new("edited");
        draft.current_image = Some("static/images/1_cat.png".to_string());
        let post = client.update_post("tok", 4, &draft).await.unwrap();
        assert_eq!(post.image_path.as_deref(), Some("static/images/1_cat.png"));
    }

    #[tokio::test]
    async fn test_delete_accepts_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/posts/4"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        client.delete_post("tok", 4).await.unwrap();
    }

    #[tokio::test]
    async fn test_interact_sends_kind() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/interactions/posts/4"))
            .and(body_json(json!({"type": "dislike"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1, "type": "dislike", "user": {"id": 2, "username": "bruno"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        client
            .interact("tok", 4, InteractionKind::Dislike)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_forbidden_edit_reports_detail() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/posts/4"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"detail": "You cannot edit this post"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client
            .update_post("tok", 4, &PostDraft::new("x"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "You cannot edit this post");
    }
}
