use json::JsonValue;
use log::{debug, info};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{StatusCode, Url};

use super::game::{self, Game};
use super::user::{self, FriendMap};
use super::SteamSource;
use crate::error::{Error, Result};

pub const DEFAULT_HOST: &str = "http://api.steampowered.com";

/// Blocking client for the Steam Web API.
pub struct SteamApi {
    key: String,
    host: String,
    client: Client,
}

impl SteamApi {
    pub fn new(key: &str, host: &str) -> Self {
        Self::with_client(Client::new(), key, host)
    }

    fn with_client(client: Client, key: &str, host: &str) -> Self {
        Self {
            key: key.to_string(),
            host: host.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn request(
        &self,
        interface: &str,
        method: &str,
        version: &str,
        params: &[(&str, &str)],
    ) -> RequestBuilder {
        self.client
            .get(format!("{}/{interface}/{method}/{version}/", self.host))
            .query(&[("key", self.key.as_str()), ("format", "json")])
            .query(params)
    }

    pub fn request_url(
        &self,
        interface: &str,
        method: &str,
        version: &str,
        params: &[(&str, &str)],
    ) -> Result<Url> {
        let request = self.request(interface, method, version, params).build()?;
        Ok(request.url().clone())
    }

    /// Issues one GET and parses the body as JSON.
    ///
    /// Any non-2xx status is an [`Error::Api`]. The key never appears in an
    /// error: URLs are redacted and transport errors lose theirs.
    pub fn call(
        &self,
        interface: &str,
        method: &str,
        version: &str,
        params: &[(&str, &str)],
    ) -> Result<JsonValue> {
        let request = self
            .request(interface, method, version, params)
            .build()
            .map_err(reqwest::Error::without_url)?;
        let url = redacted(request.url());
        debug!("GET {url}");

        let response = self.client.execute(request).map_err(transport(&url))?;
        let status = response.status();
        let body = response.text().map_err(transport(&url))?;

        if !status.is_success() {
            return Err(Error::Api {
                message: error_message(status, &body),
                url,
                status,
            });
        }

        json::parse(&body).map_err(|source| Error::Json { url, source })
    }

    pub fn owned_games(&self, steam_id: &str) -> Result<JsonValue> {
        self.call(
            "IPlayerService",
            "GetOwnedGames",
            "v0001",
            &[
                ("steamid", steam_id),
                ("include_appinfo", "1"),
                ("include_played_free_games", "1"),
            ],
        )
    }

    pub fn owned_game_records(&self, steam_id: &str) -> Result<Vec<Game>> {
        Ok(game::owned_games(&self.owned_games(steam_id)?))
    }

    pub fn owned_games_list(&self, steam_id: &str) -> Result<Vec<String>> {
        let games = self.owned_game_records(steam_id)?;
        info!("{} games owned by {steam_id}", games.len());
        Ok(games.into_iter().map(|g| g.name).collect())
    }

    pub fn user_stats_for_game(&self, app_id: u32, steam_id: &str) -> Result<JsonValue> {
        let app_id = app_id.to_string();
        self.call(
            "ISteamUserStats",
            "GetUserStatsForGame",
            "v0002",
            &[("steamid", steam_id), ("appid", app_id.as_str())],
        )
    }

    pub fn schema_for_game(&self, app_id: u32) -> Result<JsonValue> {
        let app_id = app_id.to_string();
        self.call(
            "ISteamUserStats",
            "GetSchemaForGame",
            "v2",
            &[("appid", app_id.as_str())],
        )
    }

    pub fn friend_list(&self, steam_id: &str) -> Result<JsonValue> {
        self.call(
            "ISteamUser",
            "GetFriendList",
            "v0001",
            &[("steamid", steam_id), ("relationship", "friend")],
        )
    }

    pub fn player_summaries(&self, steam_ids: &[String]) -> Result<JsonValue> {
        let steam_ids = steam_ids.join(",");
        self.call(
            "ISteamUser",
            "GetPlayerSummaries",
            "v0002",
            &[("steamids", steam_ids.as_str())],
        )
    }

    /// Friend list of `steam_id`, keyed by each friend's current display name.
    pub fn friend_map(&self, steam_id: &str) -> Result<FriendMap> {
        let ids = user::friend_ids(&self.friend_list(steam_id)?)?;
        info!("{} friends listed for {steam_id}", ids.len());

        if ids.is_empty() {
            return Ok(FriendMap::new());
        }

        user::friend_map(&self.player_summaries(&ids)?)
    }
}

impl SteamSource for SteamApi {
    fn friend_map(&self, steam_id: &str) -> Result<FriendMap> {
        SteamApi::friend_map(self, steam_id)
    }

    fn owned_games_list(&self, steam_id: &str) -> Result<Vec<String>> {
        SteamApi::owned_games_list(self, steam_id)
    }
}

fn redacted(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "key" {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut url = url.clone();
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url.to_string()
}

fn transport(url: &str) -> impl FnOnce(reqwest::Error) -> Error + '_ {
    move |source| Error::Transport {
        url: url.to_string(),
        source: source.without_url(),
    }
}

// Steam answers most failures with an HTML page, which is noise on a terminal.
fn error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() || body.starts_with('<') {
        status.to_string()
    } else {
        format!("{status}: {body}")
    }
}
