use crate::bet::Bet;
use crate::fixture::{Fixture, FixtureId};
use crate::goal::Goal;
use crate::user::{User, UserId};

/// Error from a store the scoring engine depends on.
///
/// Store failures surface unchanged to the caller; the engine never
/// retries and never produces a partial result on top of one.
#[derive(Debug)]
pub enum StoreError {
    /// A referenced entity does not exist.
    NotFound(&'static str, u64),
    /// The backing store could not be reached.
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(kind, id) => write!(f, "{kind} {id} not found"),
            Self::Unavailable(e) => write!(f, "store unavailable: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read access to registered users.
pub trait UserStore {
    /// Every registered user, in stable id order.
    fn all_users(&self) -> Result<Vec<User>, StoreError>;
}

/// Read access to placed bets, hydrated with their fixtures.
pub trait BetStore {
    fn bets_for_user(&self, user: UserId) -> Result<Vec<Bet>, StoreError>;
}

/// Read access to the match schedule, results, and scorers.
pub trait FixtureStore {
    fn fixture(&self, id: FixtureId) -> Result<Fixture, StoreError>;
    fn all_fixtures(&self) -> Result<Vec<Fixture>, StoreError>;
    fn fixtures_for_matchday(&self, matchday: u32) -> Result<Vec<Fixture>, StoreError>;
    fn goals_for_fixture(&self, id: FixtureId) -> Result<Vec<Goal>, StoreError>;
}
