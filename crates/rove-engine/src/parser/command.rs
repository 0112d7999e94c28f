//! Command resolution: from a line of input to a single action.

use log::debug;
use rove_core::{Room, World};
use strsim::jaro_winkler;

use super::direction::{is_direction_word, resolve_direction};
use super::item::match_item;
use super::normalize::normalize;
use super::Match;
use crate::action::Action;
use crate::error::{EngineError, EngineResult};

/// Minimum similarity for suggesting a verb after a typo (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// The closed set of verbs the player can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Walk through an exit.
    Go,
    /// Pick something up.
    Take,
    /// Put something down.
    Drop,
    /// Describe the room.
    Look,
    /// List carried items.
    Inventory,
    /// Show the command reference.
    Help,
    /// End the session.
    Quit,
}

impl Verb {
    /// Every verb, in help order.
    pub const ALL: [Verb; 7] = [
        Self::Go,
        Self::Take,
        Self::Drop,
        Self::Look,
        Self::Inventory,
        Self::Help,
        Self::Quit,
    ];

    /// Words that select this verb.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Go => &["go"],
            Self::Take => &["get", "take"],
            Self::Drop => &["drop"],
            Self::Look => &["look", "l"],
            Self::Inventory => &["inventory", "inv", "i"],
            Self::Help => &["help"],
            Self::Quit => &["quit", "q"],
        }
    }

    /// Parse a lower-case word into a verb.
    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|verb| verb.aliases().contains(&word))
    }

    /// The name shown in help and suggestions.
    pub fn name(&self) -> &'static str {
        self.aliases()[0]
    }
}

/// The result of resolving one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The input was blank. Nothing to do.
    Empty,
    /// The input names exactly one action.
    Resolved(Action),
    /// The input fits several choices, listed in source order.
    Ambiguous(Vec<String>),
    /// The input refers to something that does not exist here.
    Unresolvable(String),
    /// The input is missing a required argument.
    Malformed(String),
}

/// Resolve a line of input against the current state of the world.
///
/// Never mutates the world: the same input against the same world always
/// gives the same resolution. Fails only when the player's room is missing.
pub fn resolve(world: &World, input: &str) -> EngineResult<Resolution> {
    let tokens = normalize(input);
    let Some(word) = tokens.verb() else {
        return Ok(Resolution::Empty);
    };

    let room = world
        .current_room()
        .ok_or_else(|| EngineError::unknown_room(&world.player().current_room))?;
    let argument = tokens.argument();

    let resolution = match Verb::parse(word) {
        Some(Verb::Go) => resolve_go(room, &argument),
        Some(Verb::Take) => resolve_take(room, word, &argument),
        Some(Verb::Drop) => resolve_drop(&world.player().inventory, &argument),
        Some(Verb::Look) => Resolution::Resolved(Action::Inspect),
        Some(Verb::Inventory) => Resolution::Resolved(Action::ShowInventory),
        Some(Verb::Help) => Resolution::Resolved(Action::Help),
        Some(Verb::Quit) => Resolution::Resolved(Action::Quit),
        None if tokens.len() == 1 && is_bare_direction(word, room) => resolve_go(room, word),
        None => Resolution::Unresolvable(not_understood(word, &tokens.text())),
    };

    debug!("resolved {:?} in \"{}\" to {resolution:?}", tokens.text(), room.name);
    Ok(resolution)
}

/// A lone word that names a compass direction or one of this room's exits.
fn is_bare_direction(word: &str, room: &Room) -> bool {
    is_direction_word(word) || room.exits.keys().any(|exit| exit.to_lowercase() == word)
}

fn resolve_go(room: &Room, direction: &str) -> Resolution {
    if direction.is_empty() {
        return Resolution::Malformed("Sorry, you need to 'go' somewhere.".to_string());
    }

    match resolve_direction(direction, &room.directions()) {
        Match::Unique(exit) => Resolution::Resolved(Action::Move(exit)),
        Match::Ambiguous(exits) => Resolution::Ambiguous(exits),
        Match::NoMatch => Resolution::Unresolvable(format!("There's no way to go {direction}.")),
    }
}

fn resolve_take(room: &Room, verb: &str, item: &str) -> Resolution {
    if item.is_empty() {
        return Resolution::Malformed(format!("Sorry, you need to '{verb}' something."));
    }

    match match_item(item, &room.items) {
        Match::Unique(found) => Resolution::Resolved(Action::Take(found)),
        Match::Ambiguous(found) => Resolution::Ambiguous(found),
        Match::NoMatch => Resolution::Unresolvable(format!("There's no {item} anywhere.")),
    }
}

fn resolve_drop(inventory: &[String], item: &str) -> Resolution {
    if item.is_empty() {
        return Resolution::Malformed("Sorry, you need to 'drop' something.".to_string());
    }

    match match_item(item, inventory) {
        Match::Unique(found) => Resolution::Resolved(Action::Drop(found)),
        Match::Ambiguous(found) => Resolution::Ambiguous(found),
        Match::NoMatch => Resolution::Unresolvable(format!("You don't have {item}.")),
    }
}

/// Message for an unknown verb, with a suggestion when one is close.
fn not_understood(word: &str, text: &str) -> String {
    let mut message = format!("I don't understand '{text}'.");
    if let Some(verb) = suggest_verb(word) {
        message.push_str(&format!(" Did you mean '{}'?", verb.name()));
    }
    message
}

fn suggest_verb(word: &str) -> Option<Verb> {
    let mut best: Option<(Verb, f64)> = None;
    for verb in Verb::ALL {
        for alias in verb.aliases().iter().filter(|a| a.len() > 1) {
            let score = jaro_winkler(word, alias);
            if score >= SUGGEST_THRESHOLD && best.is_none_or(|(_, b)| score > b) {
                best = Some((verb, score));
            }
        }
    }
    best.map(|(verb, _)| verb)
}
