pub mod config;
pub mod season;
pub mod store;

use tippliga_core::bet::BetId;
use tippliga_core::fixture::{Fixture, FixtureId};
use tippliga_core::store::StoreError;
use tippliga_core::time;
use tippliga_core::user::{User, UserId};
use tippliga_engine::RankedEntry;

pub use config::LeagueConfig;
pub use store::{BetError, MemoryStore};

/// A running prediction league: configuration plus the data store, with
/// the scoring engine wired up behind `standings()`.
pub struct League {
    config: LeagueConfig,
    store: MemoryStore,
}

impl League {
    /// Create a league. An unusable config is replaced with defaults so
    /// the league stays operable.
    pub fn new(config: LeagueConfig) -> Self {
        let config = if config.validate() {
            config
        } else {
            tracing::warn!("unusable league configuration, falling back to defaults");
            LeagueConfig::default()
        };
        Self {
            config,
            store: MemoryStore::new(),
        }
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MemoryStore {
        &mut self.store
    }

    /// Register a user.
    pub fn add_user(&mut self, user: User) {
        self.store.insert_user(user);
    }

    /// Add a fixture to the schedule.
    pub fn add_fixture(&mut self, fixture: Fixture) {
        if fixture.matchday == 0 || fixture.matchday > self.config.matchday_count {
            tracing::warn!(
                fixture = fixture.id,
                matchday = fixture.matchday,
                "fixture lies outside the configured season"
            );
        }
        self.store.insert_fixture(fixture);
    }

    /// Place a bet against the wall clock.
    pub fn place_bet(
        &mut self,
        user: UserId,
        fixture: FixtureId,
        home: i32,
        away: i32,
    ) -> Result<BetId, BetError> {
        self.store
            .place_bet(user, fixture, home, away, time::unix_now())
    }

    /// Current leaderboard, computed fresh from every stored bet.
    pub fn standings(&self) -> Result<Vec<RankedEntry>, StoreError> {
        tippliga_engine::generate_ranking(&self.store)
    }

    pub fn current_matchday(&self) -> Result<u32, StoreError> {
        season::current_matchday(&self.store)
    }

    pub fn max_matchday(&self) -> Result<u32, StoreError> {
        season::max_matchday(&self.store)
    }
}

impl Default for League {
    fn default() -> Self {
        Self::new(LeagueConfig::default())
    }
}
