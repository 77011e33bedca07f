pub mod bet;
pub mod fixture;
pub mod goal;
pub mod player;
pub mod score;
pub mod store;
pub mod team;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::bet::{Bet, BetId};
    use crate::fixture::{Fixture, FixtureId};
    use crate::score::Score;
    use crate::team::Team;
    use crate::user::{User, UserId};

    /// Create `n` test users with sequential ids starting at 1.
    pub fn make_users(n: usize) -> Vec<User> {
        (0..n)
            .map(|i| User {
                id: i as UserId + 1,
                name: format!("User{}", i + 1),
            })
            .collect()
    }

    /// Two throwaway teams for fixtures that don't care about identity.
    pub fn make_teams() -> (Team, Team) {
        (
            Team {
                id: 1,
                name: "FC Heimdorf 04".to_string(),
                shortname: "Heimdorf".to_string(),
                abbreviation: "FCH".to_string(),
            },
            Team {
                id: 2,
                name: "SV Ausborn".to_string(),
                shortname: "Ausborn".to_string(),
                abbreviation: "SVA".to_string(),
            },
        )
    }

    /// Fixture on matchday 1 with a recorded final result.
    pub fn finished_fixture(id: FixtureId, home: u32, away: u32) -> Fixture {
        let (home_team, away_team) = make_teams();
        Fixture {
            id,
            home_team,
            away_team,
            halftime: Score::new(0, 0),
            fulltime: Score::new(home, away),
            matchday: 1,
            kickoff_unix: 0,
            finished: true,
        }
    }

    /// Fixture that has neither kicked off nor finished.
    pub fn upcoming_fixture(id: FixtureId, kickoff_unix: u64) -> Fixture {
        let (home_team, away_team) = make_teams();
        Fixture {
            id,
            home_team,
            away_team,
            halftime: Score::new(0, 0),
            fulltime: Score::new(0, 0),
            matchday: 1,
            kickoff_unix,
            finished: false,
        }
    }

    /// Fixture that kicked off with a running score but no final whistle.
    pub fn running_fixture(id: FixtureId, home: u32, away: u32) -> Fixture {
        Fixture {
            fulltime: Score::new(home, away),
            ..upcoming_fixture(id, 0)
        }
    }

    /// Unfinished fixture pinned to a specific matchday.
    pub fn matchday_fixture(id: FixtureId, matchday: u32) -> Fixture {
        Fixture {
            matchday,
            ..upcoming_fixture(id, 0)
        }
    }

    /// Bet by `user_id` on `fixture` predicting `home`:`away`.
    pub fn make_bet(id: BetId, user_id: UserId, fixture: Fixture, home: u32, away: u32) -> Bet {
        Bet {
            id,
            user_id,
            fixture,
            prediction: Score::new(home, away),
        }
    }
}
