use serde::{Deserialize, Serialize};

use crate::score::Score;
use crate::team::Team;

/// Unique identifier for a fixture.
pub type FixtureId = u64;

/// A scheduled match between two teams.
///
/// `fulltime` holds the running score while the match is in progress and
/// the final score once `finished` is set. `finished` comes from the
/// result feed; it is the only flag scoring trusts, regardless of how
/// much time has passed since kickoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub home_team: Team,
    pub away_team: Team,
    pub halftime: Score,
    pub fulltime: Score,
    /// Matchday this fixture belongs to, starting at 1.
    pub matchday: u32,
    /// Kickoff as unix seconds.
    pub kickoff_unix: u64,
    pub finished: bool,
}

impl Fixture {
    /// Whether kickoff has passed. Betting closes here.
    pub fn has_started(&self, now_unix: u64) -> bool {
        now_unix >= self.kickoff_unix
    }
}
