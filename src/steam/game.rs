use json::JsonValue;

/// One entry of an account's owned-games list.
#[derive(Debug, Clone)]
pub struct Game {
    pub name: String,
    pub app_id: u32,
    pub playtime_forever: u32,
}

impl Game {
    pub const fn new(name: String, app_id: u32, playtime_forever: u32) -> Self {
        Self {
            name,
            app_id,
            playtime_forever,
        }
    }

    /// Builds a game from a `response.games[]` member.
    ///
    /// `None` without a name; the name is only present when the request
    /// asked for `include_appinfo`.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        let name = value["name"].as_str()?;
        Some(Self::new(
            name.to_string(),
            value["appid"].as_u32().unwrap_or_default(),
            value["playtime_forever"].as_u32().unwrap_or_default(),
        ))
    }
}

/// Parses every game record of a `GetOwnedGames` body.
///
/// Private profiles answer with an empty `response` object, so a missing
/// `games` array means "no games" rather than a malformed body. The same
/// goes for a list holding a record without a name.
pub fn owned_games(body: &JsonValue) -> Vec<Game> {
    body["response"]["games"]
        .members()
        .map(Game::from_json)
        .collect::<Option<Vec<Game>>>()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owned_games() {
        let body = json::parse(
            r#"{"response": {"game_count": 2, "games": [
                {"appid": 10, "name": "Counter-Strike", "playtime_forever": 31},
                {"appid": 440, "name": "Team Fortress 2", "playtime_forever": 0}
            ]}}"#,
        )
        .unwrap();

        let games = owned_games(&body);
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].name, "Counter-Strike");
        assert_eq!(games[0].playtime_forever, 31);
        assert_eq!(games[1].app_id, 440);
    }

    #[test]
    fn private_profile_has_no_games() {
        let body = json::parse(r#"{"response": {}}"#).unwrap();
        assert!(owned_games(&body).is_empty());
    }

    #[test]
    fn nameless_record_empties_the_library() {
        let body = json::parse(
            r#"{"response": {"games": [
                {"appid": 220, "name": "Half-Life 2"},
                {"appid": 7}
            ]}}"#,
        )
        .unwrap();
        assert!(owned_games(&body).is_empty());
    }
}
