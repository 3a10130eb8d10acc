use api::ApiError;
use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

mod login;
pub use login::Login;

mod feed;
pub use feed::Feed;

mod create_post;
pub use create_post::CreatePost;

mod edit_post;
pub use edit_post::EditPost;

/// Send signed-out visitors to the login page, including right after logout.
pub(crate) fn use_login_redirect() {
    let session = use_session();
    let nav = use_navigator();
    use_effect(move || {
        if session().is_none() {
            nav.replace(Route::Login {});
        }
    });
}

/// Text for an error banner: validation messages as is, anything else
/// behind `prefix`.
pub(crate) fn failure_message(prefix: &str, err: &ApiError) -> String {
    match err {
        ApiError::Validation(message) => message.clone(),
        _ => format!("{prefix}: {err}"),
    }
}
