//! Scoreboard data model and extraction from the decoded tag tree.

mod extract;

pub use extract::extract_scores;

/// One player's raw score within an objective.
///
/// The score is unit-less as stored by the game: ticks, centimeters, or a
/// plain count depending on the objective's criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub player_name: String,
    pub score: i64,
}

/// A named scoreboard category holding one score per player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Objective {
    pub name: String,
    pub display_name: String,
    pub scores: Vec<PlayerScore>,
}
