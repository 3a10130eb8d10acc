use dioxus::prelude::*;

use store::{FeedConfig, PostId};
use ui::SessionProvider;
use views::{CreatePost, EditPost, Feed, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Feed {},
    #[route("/login")]
    Login {},
    #[route("/create-post")]
    CreatePost {},
    #[route("/edit-post/:id")]
    EditPost { id: PostId },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FEED_TOML: &str = include_str!("../feed.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> FeedConfig {
    match FeedConfig::load(FEED_TOML) {
        Ok(config) => {
            tracing::debug!("API base URL: {}", config.api.base_url);
            config
        }
        Err(e) => {
            tracing::error!("Falling back to default config: {e}");
            FeedConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    use_context_provider(|| api::ApiClient::from_config(&config));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            storage_key: config.session.storage_key.clone(),
            Router::<Route> {}
        }
    }
}
