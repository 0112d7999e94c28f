use indexmap::IndexMap;
use log::debug;

use crate::error::{CoreError, CoreResult};
use crate::player::PlayerState;
use crate::room::{Lock, Room};

/// The central world model. Owns every room and the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    rooms: IndexMap<String, Room>,
    player: PlayerState,
    score_gated: bool,
}

impl World {
    /// Assemble a world and place the player in `start`.
    ///
    /// Fails if there are no rooms, if two rooms share a name, if an exit
    /// leads to a room that does not exist, or if `start` is unknown.
    pub fn new(rooms: Vec<Room>, start: &str) -> CoreResult<Self> {
        if rooms.is_empty() {
            return Err(CoreError::EmptyMap);
        }

        let mut by_name: IndexMap<String, Room> = IndexMap::with_capacity(rooms.len());
        for room in rooms {
            if by_name.contains_key(&room.name) {
                return Err(CoreError::DuplicateRoom(room.name));
            }
            by_name.insert(room.name.clone(), room);
        }

        for room in by_name.values() {
            for (direction, target) in &room.exits {
                if !by_name.contains_key(target) {
                    return Err(CoreError::DanglingExit {
                        room: room.name.clone(),
                        direction: direction.clone(),
                        target: format!("\"{target}\""),
                    });
                }
            }
        }

        if !by_name.contains_key(start) {
            return Err(CoreError::UnknownStartRoom(start.to_string()));
        }

        let score_gated = by_name
            .values()
            .any(|r| matches!(r.lock, Some(Lock::RequiresScore(_))));

        debug!(
            "assembled world with {} rooms, starting in \"{start}\"{}",
            by_name.len(),
            if score_gated { " (score gated)" } else { "" }
        );

        Ok(Self {
            rooms: by_name,
            player: PlayerState::new(start),
            score_gated,
        })
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Look up a room by name.
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    /// Look up a room by name for mutation.
    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.get_mut(name)
    }

    /// All rooms in declaration order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The room the player stands in, if it exists.
    ///
    /// Only returns `None` if the player was moved somewhere invalid by
    /// hand; the engine treats that as an integrity fault.
    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.player.current_room)
    }

    /// Mutable access to the room the player stands in.
    pub fn current_room_mut(&mut self) -> Option<&mut Room> {
        self.rooms.get_mut(&self.player.current_room)
    }

    // -----------------------------------------------------------------------
    // Player
    // -----------------------------------------------------------------------

    /// The player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Mutable access to the player state.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// True when at least one room is locked behind a score.
    ///
    /// Entering rooms only earns points in score-gated worlds.
    pub fn is_score_gated(&self) -> bool {
        self.score_gated
    }
}
