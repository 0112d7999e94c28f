use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A requirement that must be met to enter a room.
///
/// In map files a lock is written as `{ "item": "key" }` or `{ "score": 3 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lock {
    /// The player must carry the named item.
    #[serde(rename = "item")]
    RequiresItem(String),
    /// The player's score must be at least this value.
    #[serde(rename = "score")]
    RequiresScore(u32),
}

impl fmt::Display for Lock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiresItem(item) => write!(f, "requires {item}"),
            Self::RequiresScore(score) => write!(f, "requires {score} points"),
        }
    }
}

/// A node in the world graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique room name. Acts as the room's identity.
    pub name: String,
    /// Prose shown when the player looks around.
    pub description: String,
    /// Exits keyed by direction, in declaration order. Values are room names.
    pub exits: IndexMap<String, String>,
    /// Items lying in the room, in the order they arrived.
    pub items: Vec<String>,
    /// Requirement for entering this room, if any.
    pub lock: Option<Lock>,
}

impl Room {
    /// Create a room with no exits, items, or lock.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: IndexMap::new(),
            items: Vec::new(),
            lock: None,
        }
    }

    /// Add an exit leading to `target`.
    pub fn with_exit(mut self, direction: impl Into<String>, target: impl Into<String>) -> Self {
        self.exits.insert(direction.into(), target.into());
        self
    }

    /// Add an item.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Gate entry to this room behind a lock.
    pub fn with_lock(mut self, lock: Lock) -> Self {
        self.lock = Some(lock);
        self
    }

    /// Target room name for an exit, matched exactly.
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.exits.get(direction).map(String::as_str)
    }

    /// Exit directions in declaration order.
    pub fn directions(&self) -> Vec<&str> {
        self.exits.keys().map(String::as_str).collect()
    }

    /// Check whether the room contains an item with exactly this name.
    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Put an item in the room.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Remove the first item with exactly this name. Returns false if absent.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }
}
