//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the app's [`SessionStore`] and mirrors it into a
//! signal through a store subscription, so any component reading
//! [`use_session`] re-renders on login and logout.

use api::ApiClient;
use dioxus::prelude::*;
use store::{Session, SessionStore};

/// The signed-in session, `None` when signed out.
pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}

/// The store itself, for login/logout and for passing to API actions.
pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>()
}

/// The API client provided by the app root.
pub fn use_client() -> ApiClient {
    use_context::<ApiClient>()
}

/// Create a platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): persisted in `localStorage` under `storage_key`
/// - **Native**: kept in memory for the life of the process
pub fn make_session_store(storage_key: &str) -> SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::restore(store::LocalStorage::new(storage_key))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        tracing::debug!("No persistent storage for {storage_key}, keeping session in memory");
        SessionStore::restore(store::MemoryStorage::new())
    }
}

/// Provider component that owns the session store.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(storage_key: String, children: Element) -> Element {
    let store = use_hook(|| make_session_store(&storage_key));
    let current = use_signal(|| store.current());

    let subscription = use_hook({
        let store = store.clone();
        move || {
            store.subscribe(move |session| {
                let mut current = current;
                current.set(session.cloned());
            })
        }
    });

    use_drop({
        let store = store.clone();
        move || store.unsubscribe(subscription)
    });

    use_context_provider(|| store.clone());
    use_context_provider(|| current);

    rsx! {
        {children}
    }
}

/// Button that signs the current user out.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let store = use_session_store();

    rsx! {
        button {
            class: "btn btn-destructive {class}",
            onclick: move |_| store.logout(),
            crate::Icon { icon: crate::icons::FaRightFromBracket, width: 14, height: 14 }
            " {label}"
        }
    }
}
