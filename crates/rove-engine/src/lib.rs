//! Command resolution and world-state engine for Rove.
//!
//! Raw player input flows through three stages, none of which perform I/O:
//!
//! 1. [`parser::normalize`] splits the line into lower-cased tokens.
//! 2. [`parser::resolve`] turns the tokens into a [`Resolution`]: either a
//!    single [`Action`], or a reason why no action could be chosen.
//! 3. [`apply::apply`] performs the action against the [`rove_core::World`]
//!    and reports an [`Outcome`].
//!
//! [`Session`] wires the stages together for a read-eval loop.

/// Actions, outcomes, and room snapshots.
pub mod action;
/// Applying actions to the world.
pub mod apply;
/// Engine tuning knobs.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Input normalization and command resolution.
pub mod parser;
/// Turn-by-turn session management.
pub mod session;

pub use action::{Action, BlockReason, Outcome, RoomView};
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use parser::{Resolution, Verb, resolve};
pub use session::{Rejection, Session, Turn};
