//! The request flows behind each view.
//!
//! Every flow checks what can be checked locally (form validation, a present
//! session) before touching the backend, so a rejected form never produces a
//! request. Errors are returned to the view, which renders them; nothing here
//! retries.

use store::{Credentials, InteractionKind, Post, PostId, Session, SessionStore};

use crate::error::ApiError;
use crate::forms::PostDraft;
use crate::FeedBackend;

/// Whether the login form signs in or creates an account first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Register => "Create account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Register => "Register",
        }
    }

    /// Text of the link switching to the other mode.
    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::Login => "No account yet? Register",
            AuthMode::Register => "Already have an account? Sign in",
        }
    }
}

fn require_token(store: &SessionStore) -> Result<String, ApiError> {
    store.token().ok_or(ApiError::NotAuthenticated)
}

/// Sign in, registering first in [`AuthMode::Register`], and store the session.
pub async fn authenticate<B: FeedBackend>(
    backend: &B,
    store: &SessionStore,
    mode: AuthMode,
    credentials: &Credentials,
) -> Result<Session, ApiError> {
    if credentials.username.trim().is_empty() || credentials.password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required.".to_string(),
        ));
    }

    if mode == AuthMode::Register {
        let user = backend.register(credentials).await?;
        tracing::info!("Registered user {} ({})", user.username, user.id);
    }

    let token = backend.issue_token(credentials).await?;
    Ok(store.login(token.access_token, credentials.username.clone()))
}

pub async fn load_feed<B: FeedBackend>(
    backend: &B,
    store: &SessionStore,
) -> Result<Vec<Post>, ApiError> {
    let token = require_token(store)?;
    backend.list_posts(&token).await
}

pub async fn submit_new_post<B: FeedBackend>(
    backend: &B,
    store: &SessionStore,
    draft: &PostDraft,
) -> Result<Post, ApiError> {
    draft.validate()?;
    let token = require_token(store)?;
    let post = backend.create_post(&token, draft).await?;
    tracing::info!("Created post {}", post.id);
    Ok(post)
}

/// Fetch a post and turn it into a pre-filled edit draft.
pub async fn load_post_for_edit<B: FeedBackend>(
    backend: &B,
    store: &SessionStore,
    id: PostId,
) -> Result<PostDraft, ApiError> {
    let token = require_token(store)?;
    let post = backend.get_post(&token, id).await?;
    Ok(PostDraft::from_post(&post))
}

/// Save an edited post. Without a newly picked image the stored one is kept.
pub async fn submit_post_edit<B: FeedBackend>(
    backend: &B,
    store: &SessionStore,
    id: PostId,
    draft: &PostDraft,
) -> Result<Post, ApiError> {
    draft.validate()?;
    let token = require_token(store)?;
    let post = backend.update_post(&token, id, draft).await?;
    tracing::info!("Updated post {}", post.id);
    Ok(post)
}

pub async fn react<B: FeedBackend>(
    backend: &B,
    store: &SessionStore,
    id: PostId,
    kind: InteractionKind,
) -> Result<(), ApiError> {
    let token = require_token(store)?;
    backend.interact(&token, id, kind).await
}

pub async fn remove_post<B: FeedBackend>(
    backend: &B,
    store: &SessionStore,
    id: PostId,
) -> Result<(), ApiError> {
    let token = require_token(store)?;
    backend.delete_post(&token, id).await?;
    tracing::info!("Deleted post {id}");
    Ok(())
}
