//! Turn-by-turn play session.

use log::debug;
use rove_core::{PlayerState, World};

use crate::action::{Action, Outcome, RoomView};
use crate::apply::apply;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::parser::{Resolution, resolve};

/// Why a line of input did not produce an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Several choices fit; the player should pick one.
    Ambiguous(Vec<String>),
    /// The input refers to something that does not exist here.
    Unresolvable(String),
    /// The input is missing a required argument.
    Malformed(String),
}

/// The result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Nothing happened: blank input, or the session already ended.
    Idle,
    /// An action was applied.
    Applied(Outcome),
    /// The input could not be turned into an action.
    Rejected(Rejection),
}

/// A single-player session. Owns the world for its whole lifetime.
pub struct Session {
    world: World,
    config: EngineConfig,
    finished: bool,
}

impl Session {
    /// Start a session with the default configuration.
    pub fn new(world: World) -> Self {
        Self::with_config(world, EngineConfig::default())
    }

    /// Start a session, granting the configured starting score.
    pub fn with_config(mut world: World, config: EngineConfig) -> Self {
        world.player_mut().award(config.initial_score);
        Self {
            world,
            config,
            finished: false,
        }
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player state.
    pub fn player(&self) -> &PlayerState {
        self.world.player()
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True once the player has quit.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Describe the current room without taking a turn.
    pub fn look(&self) -> EngineResult<RoomView> {
        self.world
            .current_room()
            .map(RoomView::from)
            .ok_or_else(|| EngineError::unknown_room(&self.world.player().current_room))
    }

    /// Resolve input without applying it.
    pub fn resolve(&self, input: &str) -> EngineResult<Resolution> {
        resolve(&self.world, input)
    }

    /// Apply an already resolved action.
    pub fn apply(&mut self, action: Action) -> EngineResult<Outcome> {
        if self.finished {
            return Err(EngineError::NotApplicable(
                "the session has ended".to_string(),
            ));
        }
        let outcome = apply(&mut self.world, action, &self.config)?;
        if outcome.is_terminal() {
            debug!("session finished");
            self.finished = true;
        }
        Ok(outcome)
    }

    /// Resolve and apply one line of input.
    pub fn process(&mut self, input: &str) -> EngineResult<Turn> {
        if self.finished {
            return Ok(Turn::Idle);
        }

        let turn = match self.resolve(input)? {
            Resolution::Empty => Turn::Idle,
            Resolution::Resolved(action) => Turn::Applied(self.apply(action)?),
            Resolution::Ambiguous(choices) => Turn::Rejected(Rejection::Ambiguous(choices)),
            Resolution::Unresolvable(reason) => Turn::Rejected(Rejection::Unresolvable(reason)),
            Resolution::Malformed(reason) => Turn::Rejected(Rejection::Malformed(reason)),
        };
        Ok(turn)
    }
}
