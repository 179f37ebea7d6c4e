//! Fuzzy comparison keys for Steam display names.
//!
//! Display names are often stylised ("Zer0C00l", "@lice"), so names typed on
//! the command line are compared against friend names after lowercasing and
//! mapping look-alike digits and symbols back to letters.

/// Maps a single lowercase character to its look-alike letter.
const fn substitute(c: char) -> char {
    match c {
        '0' => 'o',
        '1' => 'i',
        '2' | '7' => 'z',
        '3' => 'e',
        '4' | '6' | '9' | '@' => 'a',
        '5' => 's',
        '8' => 'b',
        other => other,
    }
}

/// Returns the comparison key for `name`.
pub fn normalize(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(substitute)
        .collect()
}

/// Whether `requested` names the friend called `display_name`.
///
/// Partial names match: the normalized request only has to appear somewhere
/// inside the normalized display name.
pub fn matches(requested: &str, display_name: &str) -> bool {
    normalize(display_name).contains(&normalize(requested))
}
