use dioxus::prelude::*;
use store::feed::avatar_initial;
use store::{Controls, InteractionKind, PostView};

use crate::components::{Avatar, Badge, Button, ButtonVariant};
use crate::icons::{FaPen, FaThumbsDown, FaThumbsUp, FaTrash};
use crate::Icon;

/// One post in the feed, with the controls its viewer is allowed to use.
///
/// Authors get edit/delete; everyone else gets like/dislike, with the
/// reaction they already hold disabled.
#[component]
pub fn PostCard(
    view: PostView,
    image_url: Option<String>,
    /// A mutation on this post is in flight.
    #[props(default)]
    busy: bool,
    on_react: EventHandler<InteractionKind>,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let author = view.post.author.username.clone();
    let initial = avatar_initial(&author);
    let actions = match view.controls() {
        Controls::Author => rsx! {
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_edit.call(()),
                Icon { icon: FaPen, width: 12, height: 12 }
                " Edit"
            }
            Button {
                variant: ButtonVariant::Destructive,
                disabled: busy,
                onclick: move |_| on_delete.call(()),
                Icon { icon: FaTrash, width: 12, height: 12 }
                " Delete"
            }
        },
        Controls::Reactions {
            like_disabled,
            dislike_disabled,
        } => {
            let like_variant = if like_disabled {
                ButtonVariant::Ghost
            } else {
                ButtonVariant::Primary
            };
            let dislike_variant = if dislike_disabled {
                ButtonVariant::Ghost
            } else {
                ButtonVariant::Destructive
            };
            rsx! {
                Button {
                    variant: like_variant,
                    disabled: like_disabled || busy,
                    onclick: move |_| on_react.call(InteractionKind::Like),
                    Icon { icon: FaThumbsUp, width: 12, height: 12 }
                    " Like"
                }
                Button {
                    variant: dislike_variant,
                    disabled: dislike_disabled || busy,
                    onclick: move |_| on_react.call(InteractionKind::Dislike),
                    Icon { icon: FaThumbsDown, width: 12, height: 12 }
                    " Dislike"
                }
            }
        }
    };
    let content = view.post.content.clone();
    let likes = view.tally.likes;
    let dislikes = view.tally.dislikes;

    rsx! {
        article {
            class: "post-card",

            header {
                class: "post-card-header",
                Avatar { initial: initial }
                h2 { class: "post-card-author", "{author}" }
            }

            div {
                class: "post-card-body",
                p { class: "post-card-content", "{content}" }

                if let Some(url) = image_url {
                    img {
                        class: "post-card-image",
                        src: "{url}",
                        alt: "Post image",
                    }
                }

                div {
                    class: "post-card-tally",
                    Badge { "Likes: {likes}" }
                    Badge { "Dislikes: {dislikes}" }
                }
            }

            footer {
                class: "post-card-actions",
                {actions}
            }
        }
    }
}
