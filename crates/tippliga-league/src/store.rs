use std::collections::BTreeMap;

use tippliga_core::bet::{Bet, BetId};
use tippliga_core::fixture::{Fixture, FixtureId};
use tippliga_core::goal::{Goal, GoalId};
use tippliga_core::player::{Player, PlayerId};
use tippliga_core::score::Score;
use tippliga_core::store::{BetStore, FixtureStore, StoreError, UserStore};
use tippliga_core::team::{Team, TeamId};
use tippliga_core::user::{User, UserId};

/// Why a bet was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BetError {
    /// Submitted scores must be non-negative.
    NegativeScore,
    /// Kickoff has passed.
    BettingClosed,
    UnknownUser(UserId),
    UnknownFixture(FixtureId),
}

impl std::fmt::Display for BetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeScore => write!(f, "negative scores detected"),
            Self::BettingClosed => write!(f, "betting closed, match has started"),
            Self::UnknownUser(id) => write!(f, "unknown user {id}"),
            Self::UnknownFixture(id) => write!(f, "unknown fixture {id}"),
        }
    }
}

impl std::error::Error for BetError {}

/// Fixture as stored; teams are joined back in on read.
#[derive(Debug, Clone)]
struct FixtureRow {
    id: FixtureId,
    home_team: TeamId,
    away_team: TeamId,
    halftime: Score,
    fulltime: Score,
    matchday: u32,
    kickoff_unix: u64,
    finished: bool,
}

#[derive(Debug, Clone)]
struct BetRow {
    id: BetId,
    prediction: Score,
}

#[derive(Debug, Clone)]
struct GoalRow {
    id: GoalId,
    fixture_id: FixtureId,
    player_id: PlayerId,
    minute: u32,
    score_after: Score,
    penalty: bool,
    own_goal: bool,
}

/// In-memory league store.
///
/// Reference implementation of the read traits: rows live in ordered
/// maps and every read hands out fully hydrated values. Bets are keyed
/// by (user, fixture), so a second bet on the same fixture replaces the
/// first.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: BTreeMap<UserId, User>,
    teams: BTreeMap<TeamId, Team>,
    players: BTreeMap<PlayerId, Player>,
    fixtures: BTreeMap<FixtureId, FixtureRow>,
    goals: BTreeMap<GoalId, GoalRow>,
    bets: BTreeMap<(UserId, FixtureId), BetRow>,
    next_bet_id: BetId,
    next_goal_id: GoalId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Register a fixture, along with both of its teams.
    pub fn insert_fixture(&mut self, fixture: Fixture) {
        let row = FixtureRow {
            id: fixture.id,
            home_team: fixture.home_team.id,
            away_team: fixture.away_team.id,
            halftime: fixture.halftime,
            fulltime: fixture.fulltime,
            matchday: fixture.matchday,
            kickoff_unix: fixture.kickoff_unix,
            finished: fixture.finished,
        };
        self.teams.insert(fixture.home_team.id, fixture.home_team);
        self.teams.insert(fixture.away_team.id, fixture.away_team);
        self.fixtures.insert(row.id, row);
    }

    /// Update a fixture's scores and finished flag from the result feed.
    pub fn record_result(
        &mut self,
        id: FixtureId,
        halftime: Score,
        fulltime: Score,
        finished: bool,
    ) -> Result<(), StoreError> {
        let row = self
            .fixtures
            .get_mut(&id)
            .ok_or(StoreError::NotFound("fixture", id))?;
        row.halftime = halftime;
        row.fulltime = fulltime;
        row.finished = finished;
        Ok(())
    }

    /// Record a goal, registering the scorer on the way.
    pub fn insert_goal(
        &mut self,
        fixture_id: FixtureId,
        scorer: Player,
        minute: u32,
        score_after: Score,
        penalty: bool,
        own_goal: bool,
    ) -> Result<GoalId, StoreError> {
        if !self.fixtures.contains_key(&fixture_id) {
            return Err(StoreError::NotFound("fixture", fixture_id));
        }
        self.next_goal_id += 1;
        let id = self.next_goal_id;
        self.goals.insert(
            id,
            GoalRow {
                id,
                fixture_id,
                player_id: scorer.id,
                minute,
                score_after,
                penalty,
                own_goal,
            },
        );
        self.players.insert(scorer.id, scorer);
        Ok(id)
    }

    /// Place or update a bet.
    ///
    /// Submitted scores arrive as signed values straight from the
    /// caller's input layer; anything negative is rejected outright.
    /// Betting closes at kickoff. A repeat bet on the same fixture
    /// overwrites the prediction and keeps the original bet id.
    pub fn place_bet(
        &mut self,
        user_id: UserId,
        fixture_id: FixtureId,
        home: i32,
        away: i32,
        now_unix: u64,
    ) -> Result<BetId, BetError> {
        if home < 0 || away < 0 {
            return Err(BetError::NegativeScore);
        }
        if !self.users.contains_key(&user_id) {
            return Err(BetError::UnknownUser(user_id));
        }
        let fixture = self
            .fixture(fixture_id)
            .map_err(|_| BetError::UnknownFixture(fixture_id))?;
        if fixture.has_started(now_unix) {
            return Err(BetError::BettingClosed);
        }

        let prediction = Score::new(home as u32, away as u32);
        let id = if let Some(row) = self.bets.get_mut(&(user_id, fixture_id)) {
            row.prediction = prediction;
            row.id
        } else {
            self.next_bet_id += 1;
            self.bets.insert(
                (user_id, fixture_id),
                BetRow {
                    id: self.next_bet_id,
                    prediction,
                },
            );
            self.next_bet_id
        };
        tracing::debug!(user_id, fixture_id, %prediction, "bet placed");
        Ok(id)
    }

    /// A user's bets restricted to one matchday.
    pub fn bets_for_user_on_matchday(
        &self,
        user: UserId,
        matchday: u32,
    ) -> Result<Vec<Bet>, StoreError> {
        Ok(self
            .bets_for_user(user)?
            .into_iter()
            .filter(|bet| bet.fixture.matchday == matchday)
            .collect())
    }

    /// Every bet placed on one fixture, in user id order.
    pub fn bets_for_fixture(&self, fixture_id: FixtureId) -> Result<Vec<Bet>, StoreError> {
        self.bets
            .iter()
            .filter(|((_, f), _)| *f == fixture_id)
            .map(|((user, fixture), row)| self.hydrate_bet(*user, *fixture, row))
            .collect()
    }

    /// The bet one user placed on one fixture, if any.
    pub fn bet_for_fixture_and_user(
        &self,
        fixture_id: FixtureId,
        user_id: UserId,
    ) -> Result<Option<Bet>, StoreError> {
        self.bets
            .get(&(user_id, fixture_id))
            .map(|row| self.hydrate_bet(user_id, fixture_id, row))
            .transpose()
    }

    fn hydrate_fixture(&self, row: &FixtureRow) -> Result<Fixture, StoreError> {
        let home_team = self
            .teams
            .get(&row.home_team)
            .cloned()
            .ok_or(StoreError::NotFound("team", row.home_team))?;
        let away_team = self
            .teams
            .get(&row.away_team)
            .cloned()
            .ok_or(StoreError::NotFound("team", row.away_team))?;
        Ok(Fixture {
            id: row.id,
            home_team,
            away_team,
            halftime: row.halftime,
            fulltime: row.fulltime,
            matchday: row.matchday,
            kickoff_unix: row.kickoff_unix,
            finished: row.finished,
        })
    }

    fn hydrate_bet(
        &self,
        user_id: UserId,
        fixture_id: FixtureId,
        row: &BetRow,
    ) -> Result<Bet, StoreError> {
        let fixture = self.fixture(fixture_id)?;
        Ok(Bet {
            id: row.id,
            user_id,
            fixture,
            prediction: row.prediction,
        })
    }
}

impl UserStore for MemoryStore {
    fn all_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.values().cloned().collect())
    }
}

impl BetStore for MemoryStore {
    fn bets_for_user(&self, user: UserId) -> Result<Vec<Bet>, StoreError> {
        self.bets
            .range((user, FixtureId::MIN)..=(user, FixtureId::MAX))
            .map(|((user, fixture), row)| self.hydrate_bet(*user, *fixture, row))
            .collect()
    }
}

impl FixtureStore for MemoryStore {
    fn fixture(&self, id: FixtureId) -> Result<Fixture, StoreError> {
        let row = self
            .fixtures
            .get(&id)
            .ok_or(StoreError::NotFound("fixture", id))?;
        self.hydrate_fixture(row)
    }

    fn all_fixtures(&self) -> Result<Vec<Fixture>, StoreError> {
        self.fixtures
            .values()
            .map(|row| self.hydrate_fixture(row))
            .collect()
    }

    fn fixtures_for_matchday(&self, matchday: u32) -> Result<Vec<Fixture>, StoreError> {
        self.fixtures
            .values()
            .filter(|row| row.matchday == matchday)
            .map(|row| self.hydrate_fixture(row))
            .collect()
    }

    fn goals_for_fixture(&self, id: FixtureId) -> Result<Vec<Goal>, StoreError> {
        self.goals
            .values()
            .filter(|row| row.fixture_id == id)
            .map(|row| {
                let scorer = self
                    .players
                    .get(&row.player_id)
                    .cloned()
                    .ok_or(StoreError::NotFound("player", row.player_id))?;
                Ok(Goal {
                    id: row.id,
                    fixture_id: row.fixture_id,
                    scorer,
                    minute: row.minute,
                    score_after: row.score_after,
                    penalty: row.penalty,
                    own_goal: row.own_goal,
                })
            })
            .collect()
    }
}
