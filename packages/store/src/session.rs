//! # Session store
//!
//! [`SessionStore`] holds the signed-in user's token and username for the
//! lifetime of the app. It is an explicit handle: the app creates one at
//! start-up and hands clones of it to every view, which read it to decide
//! whether to redirect to the login page.
//!
//! ## Lifecycle
//!
//! - [`SessionStore::new`] starts signed out; [`SessionStore::restore`] picks
//!   up a session previously written to its [`SessionStorage`].
//! - [`login`](SessionStore::login) and [`logout`](SessionStore::logout) are
//!   the only mutations. Both persist through the storage and then notify
//!   every subscriber synchronously with the new state.
//!
//! ## Subscriptions
//!
//! Views register a listener with [`subscribe`](SessionStore::subscribe) and
//! drop it with [`unsubscribe`](SessionStore::unsubscribe). Listeners are
//! snapshotted before they are called, so a listener may subscribe or
//! unsubscribe without deadlocking the store.
//!
//! The store is single-threaded (`Rc`/`RefCell`): the browser runs every
//! future on one event loop.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::memory::MemoryStorage;
use crate::models::Session;

/// Persistence backend for the current session.
///
/// Implementations swallow their own I/O errors: an unavailable backend
/// behaves like an empty one.
pub trait SessionStorage {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(Option<&Session>)>;

struct Inner {
    current: RefCell<Option<Session>>,
    storage: Box<dyn SessionStorage>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

/// Process-wide session state shared by every view.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<Inner>,
}

impl SessionStore {
    /// Create a signed-out store persisting to `storage`.
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self::with_state(storage, None)
    }

    /// Create a store initialised from whatever `storage` holds.
    pub fn restore(storage: impl SessionStorage + 'static) -> Self {
        let current = storage.load();
        if let Some(session) = &current {
            tracing::debug!("Restored session for {}", session.username);
        }
        Self::with_state(storage, current)
    }

    /// A store that forgets everything on drop.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    fn with_state(storage: impl SessionStorage + 'static, current: Option<Session>) -> Self {
        Self {
            inner: Rc::new(Inner {
                current: RefCell::new(current),
                storage: Box::new(storage),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Sign in, replacing any previous session.
    pub fn login(&self, token: impl Into<String>, username: impl Into<String>) -> Session {
        let session = Session {
            token: token.into(),
            username: username.into(),
        };
        self.inner.storage.save(&session);
        *self.inner.current.borrow_mut() = Some(session.clone());
        tracing::info!("Signed in as {}", session.username);
        self.notify();
        session
    }

    /// Sign out and forget the persisted session.
    pub fn logout(&self) {
        self.inner.storage.clear();
        let previous = self.inner.current.borrow_mut().take();
        if let Some(session) = previous {
            tracing::info!("Signed out {}", session.username);
        }
        self.notify();
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.current.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.current.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn username(&self) -> Option<String> {
        self.inner.current.borrow().as_ref().map(|s| s.username.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.current.borrow().is_some()
    }

    /// Register a listener called after every login and logout.
    pub fn subscribe(&self, listener: impl Fn(Option<&Session>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(existing, _)| *existing != id);
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        let current = self.current();
        for listener in listeners {
            listener(current.as_ref());
        }
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("username", &self.username())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}
