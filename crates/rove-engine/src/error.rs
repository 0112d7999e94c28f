//! Error types for the engine.

use log::warn;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while resolving or applying commands.
///
/// Player mistakes are never errors; they come back as data in
/// [`crate::Resolution`] or [`crate::Outcome`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// The world violates one of its invariants, for example an exit that
    /// leads to a room that does not exist. Not recoverable.
    #[error("world integrity fault: {0}")]
    IntegrityFault(String),

    /// An action was applied that does not fit the current state, such as
    /// taking an item that is not in the room. Nothing was changed.
    #[error("action cannot be applied: {0}")]
    NotApplicable(String),
}

impl EngineError {
    /// Fault for a player standing in a room that does not exist.
    pub(crate) fn unknown_room(name: &str) -> Self {
        warn!("player is in unknown room \"{name}\"");
        Self::IntegrityFault(format!("player is in unknown room \"{name}\""))
    }
}
