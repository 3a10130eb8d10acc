use api::actions::submit_new_post;
use api::PostDraft;
use dioxus::prelude::*;
use ui::{use_client, use_session, use_session_store, PostForm};

use super::{failure_message, use_login_redirect};
use crate::Route;

#[component]
pub fn CreatePost() -> Element {
    use_login_redirect();
    let session = use_session();
    let store = use_session_store();
    let client = use_client();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |draft: PostDraft| {
        let client = client.clone();
        let store = store.clone();
        spawn(async move {
            error.set(None);
            submitting.set(true);
            let result = submit_new_post(&client, &store, &draft).await;
            submitting.set(false);
            match result {
                Ok(_) => {
                    nav.push(Route::Feed {});
                }
                Err(e) => error.set(Some(failure_message("Could not create post", &e))),
            }
        });
    };

    if session().is_none() {
        return rsx! {};
    }

    rsx! {
        PostForm {
            heading: "Create post",
            submit_label: "Publish",
            initial: PostDraft::default(),
            error: error(),
            submitting: submitting(),
            on_submit: handle_submit,
        }
    }
}
