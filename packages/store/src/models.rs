//! # Domain models for the feed
//!
//! The records exchanged with the feed API. Every type is
//! `Serialize + Deserialize` and mirrors the JSON the server emits, so the
//! same structs are used for decoding responses and for building request
//! bodies.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | An account, referenced by posts and interactions. Immutable once created. |
//! | [`Post`] | A feed entry: text content, optional image path (relative to the API base URL), its author and every like/dislike recorded on it. |
//! | [`Interaction`] | One user's like or dislike on a post. The wire field is called `type`. |
//! | [`InteractionKind`] | `like` or `dislike`. |
//! | [`Session`] | The signed-in user's bearer token and username. |
//! | [`Credentials`] | Username/password pair sent to the register and token endpoints. |
//! | [`AccessToken`] | Body returned by the token endpoint. |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned post identifier.
pub type PostId = i64;

/// An account as exposed by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Like or dislike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Like,
    Dislike,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Like => "like",
            InteractionKind::Dislike => "dislike",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's reaction to a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub user: User,
}

/// A post in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    /// Path of the stored image relative to the API base URL: "static/images/1_cat.png"
    #[serde(default)]
    pub image_path: Option<String>,
    pub author: User,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

/// Username and password as typed into the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Response of the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Body of the interaction endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRequest {
    #[serde(rename = "type")]
    pub kind: InteractionKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_post_from_api() {
        let json = r#"{
            "id": 7,
            "content": "hello",
            "image_path": "static/images/2_cat.png",
            "author": {"id": 2, "username": "ana"},
            "interactions": [
                {"id": 1, "type": "like", "user": {"id": 3, "username": "bruno"}},
                {"id": 2, "type": "dislike", "user": {"id": 4, "username": "carla"}}
            ]
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.author.username, "ana");
        assert_eq!(post.image_path.as_deref(), Some("static/images/2_cat.png"));
        assert_eq!(post.interactions.len(), 2);
        assert_eq!(post.interactions[0].kind, InteractionKind::Like);
        assert_eq!(post.interactions[1].kind, InteractionKind::Dislike);
    }

    #[test]
    fn test_decode_post_without_image_or_interactions() {
        let json = r#"{"id": 1, "content": "x", "image_path": null, "author": {"id": 1, "username": "ana"}}"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.image_path.is_none());
        assert!(post.interactions.is_empty());
    }

    #[test]
    fn test_interaction_request_uses_type_field() {
        let body = serde_json::to_string(&InteractionRequest {
            kind: InteractionKind::Dislike,
        })
        .unwrap();
        assert_eq!(body, r#"{"type":"dislike"}"#);
    }

    #[test]
    fn test_access_token_defaults_token_type() {
        let token: AccessToken = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "bearer");
    }
}
