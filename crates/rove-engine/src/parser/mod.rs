//! Input normalization and command resolution.

mod command;
mod direction;
mod item;
mod normalize;

pub use command::{Resolution, Verb, resolve};
pub use direction::{expand_abbreviation, is_direction_word, resolve_direction};
pub use item::match_item;
pub use normalize::{Tokens, normalize};

/// Result of matching typed text against a set of choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    /// Exactly one choice fits.
    Unique(String),
    /// Several choices fit, in the order they were offered.
    Ambiguous(Vec<String>),
    /// Nothing fits.
    NoMatch,
}

/// Every choice starting with `prefix` (case-insensitive), without repeats.
fn prefix_matches<'a, I>(prefix: &str, choices: I) -> Match
where
    I: IntoIterator<Item = &'a str>,
{
    let mut hits: Vec<String> = Vec::new();
    for choice in choices {
        if choice.to_lowercase().starts_with(prefix) && !hits.iter().any(|h| h == choice) {
            hits.push(choice.to_string());
        }
    }

    match hits.len() {
        0 => Match::NoMatch,
        1 => Match::Unique(hits.remove(0)),
        _ => Match::Ambiguous(hits),
    }
}
