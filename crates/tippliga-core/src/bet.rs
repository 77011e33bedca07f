use serde::{Deserialize, Serialize};

use crate::fixture::Fixture;
use crate::score::Score;
use crate::user::UserId;

/// Unique identifier for a bet.
pub type BetId = u64;

/// A user's score prediction for a single fixture.
///
/// Bets come out of the store with their fixture already attached, so
/// evaluating one never requires another lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    pub id: BetId,
    pub user_id: UserId,
    pub fixture: Fixture,
    pub prediction: Score,
}
