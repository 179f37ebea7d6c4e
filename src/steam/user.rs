use std::collections::BTreeMap;

use json::JsonValue;

use crate::error::{Error, Result};

/// Display name to Steam ID, for every friend of one account.
pub type FriendMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friend {
    pub steam_id: String,
    pub display_name: String,
}

impl Friend {
    pub fn new(display_name: &str, steam_id: &str) -> Self {
        Self {
            steam_id: steam_id.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

impl std::fmt::Display for Friend {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Steam IDs listed in a `GetFriendList` body.
pub fn friend_ids(body: &JsonValue) -> Result<Vec<String>> {
    let friends = &body["friendslist"]["friends"];
    if !friends.is_array() {
        return Err(Error::MalformedResponse(
            "friend list without friendslist.friends".to_string(),
        ));
    }

    Ok(friends
        .members()
        .filter_map(|friend| friend["steamid"].as_str())
        .map(str::to_string)
        .collect())
}

/// Current display names from a `GetPlayerSummaries` body.
pub fn friend_map(body: &JsonValue) -> Result<FriendMap> {
    let players = &body["response"]["players"];
    if !players.is_array() {
        return Err(Error::MalformedResponse(
            "player summaries without response.players".to_string(),
        ));
    }

    Ok(players
        .members()
        .filter_map(|player| {
            let name = player["personaname"].as_str()?;
            let id = player["steamid"].as_str()?;
            Some((name.to_string(), id.to_string()))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_friend_ids() {
        let body = json::parse(
            r#"{"friendslist": {"friends": [
                {"steamid": "76561197960265731", "relationship": "friend", "friend_since": 0},
                {"steamid": "76561197960265738", "relationship": "friend", "friend_since": 0}
            ]}}"#,
        )
        .unwrap();

        assert_eq!(
            friend_ids(&body).unwrap(),
            vec!["76561197960265731", "76561197960265738"]
        );
    }

    #[test]
    fn missing_friend_list_is_malformed() {
        let body = json::parse(r#"{}"#).unwrap();
        assert!(matches!(
            friend_ids(&body),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn maps_display_names_to_ids() {
        let body = json::parse(
            r#"{"response": {"players": [
                {"steamid": "1", "personaname": "Zer0Cool"},
                {"steamid": "2", "personaname": "Max"}
            ]}}"#,
        )
        .unwrap();

        let map = friend_map(&body).unwrap();
        assert_eq!(map.get("Zer0Cool").map(String::as_str), Some("1"));
        assert_eq!(map.get("Max").map(String::as_str), Some("2"));
    }

    #[test]
    fn friend_displays_its_name() {
        assert_eq!(Friend::new("Max", "2").to_string(), "Max");
    }
}
