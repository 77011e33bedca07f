use serde::{Deserialize, Serialize};

use crate::fixture::FixtureId;
use crate::player::Player;
use crate::score::Score;

/// Unique identifier for a goal.
pub type GoalId = u64;

/// A single goal within a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub fixture_id: FixtureId,
    pub scorer: Player,
    /// Match minute the goal fell in.
    pub minute: u32,
    /// Scoreline after this goal counted.
    pub score_after: Score,
    pub penalty: bool,
    pub own_goal: bool,
}
