//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod components;
pub use components::show_alert;

mod session;
pub use session::{
    make_session_store, use_client, use_session, use_session_store, LogoutButton,
    SessionProvider,
};

mod feed_header;
pub use feed_header::FeedHeader;

mod post_card;
pub use post_card::PostCard;

mod post_form;
pub use post_form::PostForm;
