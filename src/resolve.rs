use log::debug;

use crate::error::{Error, Result};
use crate::normalize::{matches, normalize};
use crate::steam::{Friend, FriendMap};

/// Resolves each requested name against `friend_map`, in request order.
///
/// A name must match exactly one friend. Requests that land on a friend
/// already resolved replace that entry where it stands.
pub fn resolve_friends<S: AsRef<str>>(
    friend_map: &FriendMap,
    requested: &[S],
) -> Result<Vec<Friend>> {
    let mut resolved: Vec<Friend> = Vec::with_capacity(requested.len());

    for request in requested {
        let friend = resolve_friend(friend_map, request.as_ref())?;
        debug!("{} resolved to {} ({})", request.as_ref(), friend, friend.steam_id);

        match resolved
            .iter_mut()
            .find(|known| known.display_name == friend.display_name)
        {
            Some(known) => {
                debug!("{friend} requested more than once");
                *known = friend;
            }
            None => resolved.push(friend),
        }
    }

    Ok(resolved)
}

pub fn resolve_friend(friend_map: &FriendMap, requested: &str) -> Result<Friend> {
    let mut candidates: Vec<(&String, &String)> = friend_map
        .iter()
        .filter(|(name, _)| matches(requested, name))
        .collect();

    match candidates.len() {
        0 => Err(Error::UnknownFriend(requested.to_string())),
        1 => {
            let (name, id) = candidates.remove(0);
            Ok(Friend::new(name, id))
        }
        _ => {
            let mut names: Vec<String> = candidates
                .iter()
                .map(|(name, _)| normalize(name))
                .collect();
            names.sort();
            Err(Error::AmbiguousFriend {
                requested: requested.to_string(),
                candidates: names,
            })
        }
    }
}
