pub mod api;
pub mod game;
pub mod user;

pub use api::SteamApi;
pub use user::{Friend, FriendMap};

use crate::error::Result;

/// The two Steam lookups the common-games run depends on.
pub trait SteamSource: Sync {
    fn friend_map(&self, steam_id: &str) -> Result<FriendMap>;

    /// Names of every game owned by `steam_id`; empty for private profiles.
    fn owned_games_list(&self, steam_id: &str) -> Result<Vec<String>>;
}
