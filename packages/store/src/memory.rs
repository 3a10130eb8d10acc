use std::sync::{Arc, Mutex};

use crate::models::Session;
use crate::session::SessionStorage;

/// In-memory SessionStorage for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    session: Arc<Mutex<Option<Session>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<Session> {
        self.session.lock().ok()?.clone()
    }

    fn save(&self, session: &Session) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = Some(session.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = None;
        }
    }
}
