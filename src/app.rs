use std::io::Write;
use std::thread;

use log::info;

use crate::error::Result;
use crate::resolve::resolve_friends;
use crate::sets::intersect;
use crate::steam::{Friend, SteamSource};

/// Prints the games every requested friend of `steam_id` owns.
///
/// Nothing is written until every library has been fetched, so a failed
/// lookup leaves `out` untouched.
pub fn run<W: Write>(
    source: &dyn SteamSource,
    steam_id: &str,
    requested: &[String],
    jobs: usize,
    out: &mut W,
) -> Result<()> {
    let friend_map = source.friend_map(steam_id)?;
    info!("{} friends known for {steam_id}", friend_map.len());

    let friends = resolve_friends(&friend_map, requested)?;
    let libraries = fetch_libraries(source, &friends, jobs)?;

    let mut collected = Vec::with_capacity(libraries.len());
    for (friend, games) in friends.iter().zip(libraries) {
        if games.is_empty() {
            info!("{friend} ({}) has an empty or private library", friend.steam_id);
            writeln!(out, "No games found for {friend} (ignoring...)")?;
        } else {
            collected.push(games);
        }
    }

    let mut common = intersect(collected);
    common.sort();

    let names: Vec<&str> = friends.iter().map(|f| f.display_name.as_str()).collect();
    writeln!(out, "Common games for {}", names.join(", "))?;
    for game in &common {
        writeln!(out, "{game}")?;
    }

    Ok(())
}

/// Fetches each friend's library, at most `jobs` at a time.
///
/// Results come back in `friends` order; the first failure in that order wins.
fn fetch_libraries(
    source: &dyn SteamSource,
    friends: &[Friend],
    jobs: usize,
) -> Result<Vec<Vec<String>>> {
    let mut libraries = Vec::with_capacity(friends.len());

    for batch in friends.chunks(jobs.max(1)) {
        // Thread scope waits for the whole batch before any result is used.
        let results: Vec<Result<Vec<String>>> = thread::scope(|scope| {
            let handles: Vec<_> = batch
                .iter()
                .map(|friend| scope.spawn(move || source.owned_games_list(&friend.steam_id)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        });

        for result in results {
            libraries.push(result?);
        }
    }

    Ok(libraries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::steam::FriendMap;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeSteam {
        friends: FriendMap,
        libraries: HashMap<String, Vec<String>>,
        failing: Option<String>,
    }

    impl FakeSteam {
        fn with_friend(mut self, name: &str, id: &str, games: &[&str]) -> Self {
            self.friends.insert(name.to_string(), id.to_string());
            self.libraries
                .insert(id.to_string(), games.iter().map(|g| g.to_string()).collect());
            self
        }
    }

    impl SteamSource for FakeSteam {
        fn friend_map(&self, steam_id: &str) -> Result<FriendMap> {
            assert_eq!(steam_id, "me");
            Ok(self.friends.clone())
        }

        fn owned_games_list(&self, steam_id: &str) -> Result<Vec<String>> {
            if self.failing.as_deref() == Some(steam_id) {
                return Err(Error::Api {
                    url: format!("http://api.test/IPlayerService/GetOwnedGames/v0001/?steamid={steam_id}"),
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    message: "500 Internal Server Error".to_string(),
                });
            }
            Ok(self.libraries.get(steam_id).cloned().unwrap_or_default())
        }
    }

    fn requested(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn output(source: &FakeSteam, names: &[&str], jobs: usize) -> Result<String> {
        let mut out = Vec::new();
        run(source, "me", &requested(names), jobs, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn three_friends() -> FakeSteam {
        FakeSteam::default()
            .with_friend("F1", "1", &["C", "A", "B"])
            .with_friend("F2", "2", &["D", "C", "B"])
            .with_friend("F3", "3", &[])
    }

    #[test]
    fn prints_sorted_common_games() {
        let text = output(&three_friends(), &["f1", "f2", "f3"], 1).unwrap();
        assert_eq!(
            text,
            "No games found for F3 (ignoring...)\nCommon games for F1, F2, F3\nB\nC\n"
        );
    }

    #[test]
    fn parallel_fetch_keeps_friend_order() {
        let text = output(&three_friends(), &["f3", "f2", "f1"], 3).unwrap();
        assert_eq!(
            text,
            "No games found for F3 (ignoring...)\nCommon games for F3, F2, F1\nB\nC\n"
        );
    }

    #[test]
    fn single_friend_lists_whole_library() {
        let text = output(&three_friends(), &["f1"], 4).unwrap();
        assert_eq!(text, "Common games for F1\nA\nB\nC\n");
    }

    #[test]
    fn only_empty_libraries_prints_header() {
        let text = output(&three_friends(), &["f3"], 1).unwrap();
        assert_eq!(
            text,
            "No games found for F3 (ignoring...)\nCommon games for F3\n"
        );
    }

    #[test]
    fn api_failure_prints_nothing() {
        let mut source = three_friends();
        source.failing = Some("2".to_string());

        let mut out = Vec::new();
        let err = run(&source, "me", &requested(&["f1", "f2", "f3"]), 2, &mut out).unwrap_err();
        assert!(matches!(err, Error::Api { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn resolution_failure_prints_nothing() {
        let mut out = Vec::new();
        let err = run(&three_friends(), "me", &requested(&["f"]), 1, &mut out).unwrap_err();
        assert!(matches!(err, Error::AmbiguousFriend { .. }));
        assert!(out.is_empty());
    }
}
