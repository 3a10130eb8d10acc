//! # Browser `localStorage` session persistence
//!
//! [`LocalStorage`] is the [`SessionStorage`] used on the **web platform**. It
//! keeps the signed-in session as a JSON string under a single key so that a
//! page reload does not sign the user out.
//!
//! ## Error handling
//!
//! A missing `window`, disabled storage, or a corrupted entry all degrade to
//! "no session". Failures are logged and otherwise ignored; the user simply
//! has to sign in again.

use crate::models::Session;
use crate::session::SessionStorage;

/// `window.localStorage`-backed SessionStorage.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalStorage {
    fn load(&self) -> Option<Session> {
        let raw = self.storage()?.get_item(&self.key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored session: {e}");
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, session will not survive a reload");
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                if storage.set_item(&self.key, &raw).is_err() {
                    tracing::warn!("Failed to persist session");
                }
            }
            Err(e) => tracing::warn!("Failed to encode session: {e}"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
