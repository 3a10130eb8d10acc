//! Typed errors for every call made against the feed API.

use serde_json::Value;

/// Why a feed operation failed.
///
/// Views render this directly: [`ApiError`]'s `Display` prefers the message
/// the server put in the response's `detail` field and falls back to the
/// transport error text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// No session to authenticate the request with.
    #[error("not signed in")]
    NotAuthenticated,
    /// The server answered with a non-2xx status.
    #[error("{}", describe_server(.status, .detail))]
    Server { status: u16, detail: Option<String> },
    /// The request never got an answer.
    #[error("{0}")]
    Transport(String),
    /// The server answered 2xx with a body we could not decode.
    #[error("unexpected response: {0}")]
    Decode(String),
}

fn describe_server(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("request failed with status {status}"),
    }
}

impl ApiError {
    /// The message supplied by the server, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// Missing session or a token the server refused.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated) || self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Build a server error from a status and raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Server {
            status,
            detail: detail_from_body(body),
        }
    }
}

/// Extract the `detail` field of an error body.
///
/// A string is used as is. A list of validation errors (`[{"msg": ...}]`) is
/// joined with `"; "`.
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
