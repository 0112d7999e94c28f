//! Player state management.

/// The player's position, belongings, and progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Name of the room the player is standing in.
    pub current_room: String,
    /// Items carried, in pickup order.
    pub inventory: Vec<String>,
    /// Progress score. Only ever grows, so it stays private.
    score: u32,
}

impl PlayerState {
    /// Create a new player with an empty inventory and zero score.
    pub fn new(current_room: impl Into<String>) -> Self {
        Self {
            current_room: current_room.into(),
            inventory: Vec::new(),
            score: 0,
        }
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Raise the score. Saturates instead of wrapping.
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Check if the player carries an item with exactly this name.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Add an item to the end of the inventory.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Remove the first item with exactly this name. Returns false if absent.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }
}
