pub mod config;
pub mod feed;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::{ConfigError, FeedConfig};
pub use feed::{Controls, PostView, Tally};
pub use models::{
    AccessToken, Credentials, Interaction, InteractionKind, InteractionRequest, Post, PostId,
    Session, User,
};
pub use session::{SessionStorage, SessionStore, SubscriptionId};
