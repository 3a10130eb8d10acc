use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaPlus;
use crate::session::LogoutButton;
use crate::Icon;

/// Title bar of the feed: greeting, sign-out and the new-post button.
#[component]
pub fn FeedHeader(username: String, on_new_post: EventHandler<()>) -> Element {
    rsx! {
        header {
            class: "feed-header",
            h1 { class: "page-title", "Feed" }
            div {
                class: "feed-header-user",
                span { "Hello, {username}" }
                LogoutButton {}
            }
        }
        Button {
            variant: ButtonVariant::Primary,
            class: "feed-new-post",
            onclick: move |_| on_new_post.call(()),
            Icon { icon: FaPlus, width: 12, height: 12 }
            " New post"
        }
    }
}
