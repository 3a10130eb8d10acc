//! Sign-in page. The same form registers a new account when switched over.

use api::actions::{authenticate, AuthMode};
use dioxus::prelude::*;
use store::Credentials;
use ui::components::{Alert, Button, ButtonVariant, Input, Label};
use ui::{use_client, use_session, use_session_store};

use super::failure_message;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let store = use_session_store();
    let client = use_client();
    let nav = use_navigator();
    let mut mode = use_signal(AuthMode::default);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: skip straight to the feed
    use_hook(move || {
        if session.peek().is_some() {
            nav.replace(Route::Feed {});
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let store = store.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let credentials = Credentials::new(username(), password());
            match authenticate(&client, &store, mode(), &credentials).await {
                Ok(session) => {
                    tracing::info!("Signed in as {}", session.username);
                    nav.push(Route::Feed {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(failure_message("Authentication failed", &e)));
                }
            }
        });
    };

    let current = mode();
    let title = current.title();
    let switch_prompt = current.switch_prompt();
    let submit_label = if loading() {
        match current {
            AuthMode::Login => "Signing in...",
            AuthMode::Register => "Creating account...",
        }
    } else {
        current.submit_label()
    };

    rsx! {
        div {
            class: "page page-narrow",
            h1 { class: "page-title", "{title}" }

            if let Some(message) = error() {
                Alert { "{message}" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    Label { html_for: "username", "Username" }
                    Input {
                        id: "username",
                        class: "w-full",
                        autocomplete: "username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "password", "Password" }
                    Input {
                        id: "password",
                        class: "w-full",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    "{submit_label}"
                }
            }

            Button {
                variant: ButtonVariant::Ghost,
                class: "w-full",
                disabled: loading(),
                onclick: move |_| {
                    error.set(None);
                    mode.set(current.toggle());
                },
                "{switch_prompt}"
            }
        }
    }
}
