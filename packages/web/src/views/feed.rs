use api::actions::{load_feed, react, remove_post};
use dioxus::prelude::*;
use store::feed::feed_for;
use store::{InteractionKind, PostId};
use ui::components::Alert;
use ui::{show_alert, use_client, use_session, use_session_store, FeedHeader, PostCard};

use super::{failure_message, use_login_redirect};
use crate::Route;

/// A like/dislike/delete fired from a post card.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Mutation {
    React(PostId, InteractionKind),
    Delete(PostId),
}

impl Mutation {
    fn post_id(&self) -> PostId {
        match self {
            Mutation::React(id, _) | Mutation::Delete(id) => *id,
        }
    }

    fn failure_prefix(&self) -> &'static str {
        match self {
            Mutation::React(..) => "Could not record interaction",
            Mutation::Delete(_) => "Could not delete post",
        }
    }
}

#[component]
pub fn Feed() -> Element {
    use_login_redirect();
    let session = use_session();
    let store = use_session_store();
    let client = use_client();
    let nav = use_navigator();
    let mut refresh = use_signal(|| 0u32);
    let mut pending = use_signal(|| Option::<PostId>::None);

    let posts = use_resource({
        let client = client.clone();
        let store = store.clone();
        move || {
            // Refetch after every successful mutation and on session change
            let _ = refresh();
            let _ = session();
            let client = client.clone();
            let store = store.clone();
            async move { load_feed(&client, &store).await }
        }
    });

    let run = use_callback({
        let client = client.clone();
        let store = store.clone();
        move |mutation: Mutation| {
            let client = client.clone();
            let store = store.clone();
            spawn(async move {
                pending.set(Some(mutation.post_id()));
                let result = match mutation {
                    Mutation::React(id, kind) => react(&client, &store, id, kind).await,
                    Mutation::Delete(id) => remove_post(&client, &store, id).await,
                };
                pending.set(None);
                match result {
                    Ok(()) => refresh += 1,
                    Err(e) => show_alert(&failure_message(mutation.failure_prefix(), &e)),
                }
            });
        }
    });

    let Some(current) = session() else {
        return rsx! {};
    };

    let body = match posts.read().clone() {
        None => rsx! {
            p { class: "feed-status", "Loading posts..." }
        },
        Some(Err(e)) => {
            let message = failure_message("Could not load posts", &e);
            rsx! {
                Alert { "{message}" }
            }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "feed-status", "No posts yet." }
        },
        Some(Ok(list)) => {
            let cards: Vec<_> = feed_for(list, &current.username)
                .into_iter()
                .map(|view| {
                    let image_url = view
                        .post
                        .image_path
                        .as_deref()
                        .map(|path| client.image_url(path));
                    (view.post.id, image_url, view)
                })
                .collect();
            rsx! {
                for (id, image_url, view) in cards {
                    PostCard {
                        key: "{id}",
                        view: view,
                        image_url: image_url,
                        busy: pending() == Some(id),
                        on_react: move |kind| run.call(Mutation::React(id, kind)),
                        on_edit: move |_| {
                            nav.push(Route::EditPost { id });
                        },
                        on_delete: move |_| run.call(Mutation::Delete(id)),
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            FeedHeader {
                username: current.username.clone(),
                on_new_post: move |_| {
                    nav.push(Route::CreatePost {});
                },
            }
            {body}
        }
    }
}
