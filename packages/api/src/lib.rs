//! # API crate: client for the feed REST API
//!
//! Everything the frontend needs to talk to the feed server lives here. The
//! views never build HTTP requests themselves; they call the flows in
//! [`actions`], which go through the [`FeedBackend`] trait.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`actions`] | The request flows each view performs (sign in, load feed, create/edit/delete posts, react), including client-side validation and session checks. |
//! | [`client`] | [`ApiClient`], the `reqwest` implementation of [`FeedBackend`] against a configurable base URL. |
//! | [`error`] | [`ApiError`], the typed error every call returns. |
//! | [`forms`] | [`PostDraft`] and [`ImageUpload`], the create/edit form payload and its multipart encoding. |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Body |
//! |--------|------|------|------|
//! | POST | `/users/register` | none | JSON credentials |
//! | POST | `/users/token` | none | form-urlencoded credentials |
//! | GET | `/posts` | bearer | none |
//! | GET | `/posts/{id}` | bearer | none |
//! | POST | `/posts` | bearer | multipart `content`, `image?` |
//! | PUT | `/posts/{id}` | bearer | multipart `content`, `image?` |
//! | DELETE | `/posts/{id}` | bearer | none |
//! | POST | `/interactions/posts/{id}` | bearer | JSON `{type}` |

use std::future::Future;

pub mod actions;
pub mod client;
pub mod error;
pub mod forms;

pub use actions::AuthMode;
pub use client::ApiClient;
pub use error::ApiError;
pub use forms::{ImageUpload, PostDraft};

pub use store::{AccessToken, Credentials, InteractionKind, Post, PostId, User};

/// The operations the feed server offers.
///
/// [`ApiClient`] implements it over HTTP; tests substitute an in-memory fake.
pub trait FeedBackend {
    fn register(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<User, ApiError>>;
    fn issue_token(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AccessToken, ApiError>>;
    fn list_posts(&self, token: &str) -> impl Future<Output = Result<Vec<Post>, ApiError>>;
    fn get_post(&self, token: &str, id: PostId) -> impl Future<Output = Result<Post, ApiError>>;
    fn create_post(
        &self,
        token: &str,
        draft: &PostDraft,
    ) -> impl Future<Output = Result<Post, ApiError>>;
    fn update_post(
        &self,
        token: &str,
        id: PostId,
        draft: &PostDraft,
    ) -> impl Future<Output = Result<Post, ApiError>>;
    fn delete_post(&self, token: &str, id: PostId) -> impl Future<Output = Result<(), ApiError>>;
    fn interact(
        &self,
        token: &str,
        id: PostId,
        kind: InteractionKind,
    ) -> impl Future<Output = Result<(), ApiError>>;
}
