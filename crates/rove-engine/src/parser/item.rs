//! Item name matching.

use super::{Match, prefix_matches};

/// Match a possibly partial item name against candidates.
///
/// A candidate equal to `name` (case-insensitive) wins outright. Otherwise
/// every candidate starting with `name` is a hit; identical names count
/// once. Callers reject an empty `name` before getting here.
pub fn match_item(name: &str, candidates: &[String]) -> Match {
    let needle = name.to_lowercase();
    if needle.is_empty() {
        return Match::NoMatch;
    }

    if let Some(exact) = candidates.iter().find(|c| c.to_lowercase() == needle) {
        return Match::Unique(exact.clone());
    }

    prefix_matches(&needle, candidates.iter().map(String::as_str))
}
