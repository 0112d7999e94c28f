//! Actions the resolver produces and outcomes the applier reports.

use std::fmt;

use rove_core::Room;

/// A fully resolved player command, ready to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Walk through the exit with this exact direction name.
    Move(String),
    /// Pick up the item with this exact name from the current room.
    Take(String),
    /// Put down the carried item with this exact name.
    Drop(String),
    /// Describe the current room.
    Inspect,
    /// List carried items.
    ShowInventory,
    /// Show the command reference.
    Help,
    /// End the session.
    Quit,
}

/// Read-only snapshot of a room for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    /// Room name.
    pub name: String,
    /// Room description.
    pub description: String,
    /// Items in the room at the time of the snapshot.
    pub items: Vec<String>,
    /// Exit directions in declaration order.
    pub exits: Vec<String>,
}

impl From<&Room> for RoomView {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            description: room.description.clone(),
            items: room.items.clone(),
            exits: room.exits.keys().cloned().collect(),
        }
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    /// The room requires an item the player does not carry.
    MissingItem(String),
    /// The room requires a higher score.
    InsufficientScore {
        /// Score needed to enter.
        required: u32,
        /// The player's score at the time of the attempt.
        current: u32,
    },
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingItem(item) => {
                write!(f, "The door is locked. You need {item} to open it.")
            }
            Self::InsufficientScore { required, current } => write!(
                f,
                "You are not authorized to go there as you have insufficient points \
                 ({current} of {required})."
            ),
        }
    }
}

/// What happened when an action was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The player walked into another room.
    Moved {
        /// Exit that was taken.
        direction: String,
        /// The room the player arrived in.
        room: RoomView,
    },
    /// The player picked up an item.
    Took(String),
    /// The player put down an item.
    Dropped(String),
    /// A lock kept the player out. Nothing changed.
    Blocked {
        /// Exit the player tried.
        direction: String,
        /// The unmet requirement.
        reason: BlockReason,
    },
    /// Copy of the player's inventory.
    Inventory(Vec<String>),
    /// Description of the current room.
    RoomView(RoomView),
    /// The player asked for help.
    Help,
    /// The session is over.
    Quit,
}

impl Outcome {
    /// True for the outcome that ends a session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
