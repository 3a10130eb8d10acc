use api::actions::{load_post_for_edit, submit_post_edit};
use api::PostDraft;
use dioxus::prelude::*;
use store::PostId;
use ui::components::Alert;
use ui::{use_client, use_session, use_session_store, PostForm};

use super::{failure_message, use_login_redirect};
use crate::Route;

#[component]
pub fn EditPost(id: PostId) -> Element {
    use_login_redirect();

    // Track the id in a signal so the loader re-runs when the route param changes
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let session = use_session();
    let store = use_session_store();
    let client = use_client();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let draft = use_resource({
        let client = client.clone();
        let store = store.clone();
        move || {
            let id = id_signal();
            let client = client.clone();
            let store = store.clone();
            async move { load_post_for_edit(&client, &store, id).await }
        }
    });

    let handle_submit = {
        let client = client.clone();
        move |draft: PostDraft| {
            let client = client.clone();
            let store = store.clone();
            let id = id_signal();
            spawn(async move {
                error.set(None);
                submitting.set(true);
                let result = submit_post_edit(&client, &store, id, &draft).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        nav.push(Route::Feed {});
                    }
                    Err(e) => error.set(Some(failure_message("Could not update post", &e))),
                }
            });
        }
    };

    if session().is_none() {
        return rsx! {};
    }

    let current = draft.read().clone();
    match current {
        None => rsx! {
            div {
                class: "page page-narrow",
                p { class: "feed-status", "Loading post..." }
            }
        },
        Some(Err(e)) => {
            let message = if e.is_not_found() {
                "Post not found".to_string()
            } else {
                failure_message("Could not load post", &e)
            };
            rsx! {
                div {
                    class: "page page-narrow",
                    Alert { "{message}" }
                }
            }
        }
        Some(Ok(initial)) => {
            let current_image_url = initial
                .current_image
                .as_deref()
                .map(|path| client.image_url(path));
            rsx! {
                PostForm {
                    key: "{id}",
                    heading: "Edit post",
                    submit_label: "Save changes",
                    initial: initial,
                    current_image_url: current_image_url,
                    error: error(),
                    submitting: submitting(),
                    on_submit: handle_submit,
                }
            }
        }
    }
}
