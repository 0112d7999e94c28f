//! Direction resolution against the exits of the current room.

use super::{Match, prefix_matches};

/// Compass abbreviations and the full names they stand for.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("n", "north"),
    ("s", "south"),
    ("e", "east"),
    ("w", "west"),
    ("ne", "northeast"),
    ("nw", "northwest"),
    ("se", "southeast"),
    ("sw", "southwest"),
];

/// Words that read as a direction even without a `go` in front.
const DIRECTION_WORDS: &[&str] = &[
    "north",
    "south",
    "east",
    "west",
    "northeast",
    "northwest",
    "southeast",
    "southwest",
    "up",
    "down",
];

/// Expand a compass abbreviation such as `ne` to its full name.
pub fn expand_abbreviation(token: &str) -> Option<&'static str> {
    ABBREVIATIONS
        .iter()
        .find(|(short, _)| *short == token)
        .map(|(_, full)| *full)
}

/// True for compass names, their abbreviations, `up`, and `down`.
pub fn is_direction_word(token: &str) -> bool {
    DIRECTION_WORDS.contains(&token) || expand_abbreviation(token).is_some()
}

/// Resolve `token` against the exits of the current room.
///
/// Precedence is fixed: an exact exit name wins, then a compass
/// abbreviation that expands to an exit, then every exit that starts with
/// the token. Only exits passed in are ever returned, in the order given.
pub fn resolve_direction(token: &str, exits: &[&str]) -> Match {
    let token = token.to_lowercase();
    if token.is_empty() {
        return Match::NoMatch;
    }

    if let Some(exact) = find_exit(exits, &token) {
        return Match::Unique(exact.to_string());
    }

    if let Some(expanded) = find_exit_by_abbreviation(exits, &token) {
        return Match::Unique(expanded.to_string());
    }

    prefix_matches(&token, exits.iter().copied())
}

fn find_exit<'a>(exits: &[&'a str], name: &str) -> Option<&'a str> {
    exits.iter().copied().find(|e| e.to_lowercase() == name)
}

fn find_exit_by_abbreviation<'a>(exits: &[&'a str], token: &str) -> Option<&'a str> {
    expand_abbreviation(token).and_then(|full| find_exit(exits, full))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique(s: &str) -> Match {
        Match::Unique(s.to_string())
    }

    #[test]
    fn exact_name_resolves() {
        assert_eq!(resolve_direction("north", &["north", "south"]), unique("north"));
        assert_eq!(resolve_direction("NORTH", &["north"]), unique("north"));
        assert_eq!(resolve_direction("portal", &["Portal"]), unique("Portal"));
    }

    #[test]
    fn exact_name_beats_abbreviation() {
        // "e" is both an exit and the abbreviation of another exit.
        assert_eq!(resolve_direction("e", &["east", "e"]), unique("e"));
        assert_eq!(resolve_direction("e", &["e", "east"]), unique("e"));
    }

    #[test]
    fn abbreviations_expand() {
        let exits = ["north", "northeast"];
        assert_eq!(resolve_direction("n", &exits), unique("north"));
        assert_eq!(resolve_direction("ne", &exits), unique("northeast"));
        assert_eq!(resolve_direction("sw", &["southwest", "up"]), unique("southwest"));
    }

    #[test]
    fn abbreviation_beats_prefix() {
        // "n" prefixes both, but expands to exactly one of them.
        assert_eq!(resolve_direction("n", &["northwest", "north"]), unique("north"));
    }

    #[test]
    fn unique_prefix_resolves() {
        assert_eq!(resolve_direction("nor", &["north", "south"]), unique("north"));
        assert_eq!(resolve_direction("u", &["up", "down"]), unique("up"));
        // Abbreviation target absent, so fall through to prefix matching.
        assert_eq!(resolve_direction("n", &["northwest"]), unique("northwest"));
    }

    #[test]
    fn ambiguous_prefix_lists_in_exit_order() {
        assert_eq!(
            resolve_direction("nor", &["north", "east", "northwest"]),
            Match::Ambiguous(vec!["north".into(), "northwest".into()])
        );
        assert_eq!(
            resolve_direction("nor", &["northwest", "north"]),
            Match::Ambiguous(vec!["northwest".into(), "north".into()])
        );
    }

    #[test]
    fn unknown_direction() {
        assert_eq!(resolve_direction("west", &["north", "east"]), Match::NoMatch);
        assert_eq!(resolve_direction("n", &[]), Match::NoMatch);
        assert_eq!(resolve_direction("", &["north"]), Match::NoMatch);
    }

    #[test]
    fn direction_words() {
        assert!(is_direction_word("north"));
        assert!(is_direction_word("nw"));
        assert!(is_direction_word("up"));
        assert!(!is_direction_word("nor"));
        assert!(!is_direction_word("look"));
        assert_eq!(expand_abbreviation("se"), Some("southeast"));
        assert_eq!(expand_abbreviation("x"), None);
    }
}
