//! Core types for Rove: rooms, locks, player state, and the world model.
//!
//! This crate defines the data the engine works on. It is independent of
//! command parsing: you can construct a [`World`] programmatically or load
//! one from a JSON map file with [`map::load_map`].

/// Error types used throughout the crate.
pub mod error;
/// JSON map loading and validation.
pub mod map;
/// Player position, inventory, and score.
pub mod player;
/// Rooms, exits, and lock requirements.
pub mod room;
/// The central world model that owns rooms and the player.
pub mod world;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export map loading entry points.
pub use map::{load_map, parse_map};
/// Re-export player state.
pub use player::PlayerState;
/// Re-export room types.
pub use room::{Lock, Room};
/// Re-export the world model.
pub use world::World;
