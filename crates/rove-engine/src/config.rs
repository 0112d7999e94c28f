//! Configuration for a play session.

/// Scoring knobs for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Score granted to the player when the session starts.
    pub initial_score: u32,
    /// Points earned for each room entered in a score-gated world.
    pub score_per_entry: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_score: 1,
            score_per_entry: 1,
        }
    }
}

impl EngineConfig {
    /// Set the starting score.
    pub fn with_initial_score(mut self, score: u32) -> Self {
        self.initial_score = score;
        self
    }

    /// Set the points earned per room entered.
    pub fn with_score_per_entry(mut self, points: u32) -> Self {
        self.score_per_entry = points;
        self
    }
}
