use tippliga_core::score::Score;
use tippliga_core::store::FixtureStore;
use tippliga_core::test_helpers::{make_users, upcoming_fixture};
use tippliga_league::{BetError, League, LeagueConfig};

/// Far enough in the future that betting is always open.
const DISTANT_KICKOFF: u64 = 32_503_680_000;

/// League with three users and two open matchday-1 fixtures.
fn sample_league() -> League {
    let mut league = League::new(LeagueConfig::default());
    for user in make_users(3) {
        league.add_user(user);
    }
    league.add_fixture(upcoming_fixture(1, DISTANT_KICKOFF));
    league.add_fixture(upcoming_fixture(2, DISTANT_KICKOFF));
    league
}

#[test]
fn leaderboard_reflects_bet_quality() {
    let mut league = sample_league();

    // Everyone bets on fixture 1, which later finishes 2:1.
    league.place_bet(1, 1, 3, 2).unwrap(); // right difference
    league.place_bet(2, 1, 2, 11).unwrap(); // one goal count right
    league.place_bet(3, 1, 2, 1).unwrap(); // exact

    league
        .store_mut()
        .record_result(1, Score::new(1, 0), Score::new(2, 1), true)
        .unwrap();

    let table = league.standings().unwrap();
    assert_eq!(table.len(), 3);

    assert_eq!(table[0].position, 1);
    assert_eq!(table[0].user.id, 3);
    assert_eq!(table[0].points, 5);

    assert_eq!(table[1].position, 2);
    assert_eq!(table[1].user.id, 1);
    assert_eq!(table[1].points, 3);

    assert_eq!(table[2].position, 3);
    assert_eq!(table[2].user.id, 2);
    assert!(table[2].points < 3);
}

#[test]
fn unfinished_results_count_for_nothing_until_the_whistle() {
    let mut league = sample_league();
    league.place_bet(1, 1, 1, 1).unwrap();

    // Result recorded but the match is not over yet.
    league
        .store_mut()
        .record_result(1, Score::new(1, 1), Score::new(1, 1), false)
        .unwrap();
    let table = league.standings().unwrap();
    assert_eq!(table[0].points, 0);

    league
        .store_mut()
        .record_result(1, Score::new(1, 1), Score::new(1, 1), true)
        .unwrap();
    let table = league.standings().unwrap();
    assert_eq!(table[0].user.id, 1);
    assert_eq!(table[0].points, 5);
}

#[test]
fn bets_close_once_a_match_has_kicked_off() {
    let mut league = sample_league();
    league.add_fixture(upcoming_fixture(3, 0));

    assert_eq!(league.place_bet(1, 3, 1, 2), Err(BetError::BettingClosed));
    assert!(league.place_bet(1, 1, 1, 2).is_ok());
}

#[test]
fn negative_submissions_never_reach_the_store() {
    let mut league = sample_league();
    assert_eq!(league.place_bet(1, 1, -1, 0), Err(BetError::NegativeScore));
    assert_eq!(league.place_bet(1, 1, 0, -1), Err(BetError::NegativeScore));
    assert!(league.store().bets_for_fixture(1).unwrap().is_empty());
}

#[test]
fn changing_a_bet_keeps_a_single_entry() {
    let mut league = sample_league();
    let first = league.place_bet(1, 1, 1, 0).unwrap();
    let second = league.place_bet(1, 1, 4, 0).unwrap();
    assert_eq!(first, second);

    let bet = league
        .store()
        .bet_for_fixture_and_user(1, 1)
        .unwrap()
        .unwrap();
    assert_eq!(bet.prediction, Score::new(4, 0));
}

#[test]
fn users_without_bets_still_appear_in_the_table() {
    let mut league = sample_league();
    league.place_bet(1, 1, 2, 1).unwrap();
    league
        .store_mut()
        .record_result(1, Score::new(0, 0), Score::new(2, 1), true)
        .unwrap();

    let table = league.standings().unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table[0].user.id, 1);
    assert_eq!(table[1].points, 0);
    assert_eq!(table[2].points, 0);
    // Pointless users keep their registration order
    assert_eq!(table[1].user.id, 2);
    assert_eq!(table[2].user.id, 3);
}

#[test]
fn season_progresses_matchday_by_matchday() {
    let mut league = League::default();
    let mut second_day = upcoming_fixture(10, DISTANT_KICKOFF);
    second_day.matchday = 2;
    league.add_fixture(upcoming_fixture(1, DISTANT_KICKOFF));
    league.add_fixture(second_day);

    assert_eq!(league.max_matchday().unwrap(), 2);
    assert_eq!(league.current_matchday().unwrap(), 1);

    league
        .store_mut()
        .record_result(1, Score::new(0, 0), Score::new(3, 0), true)
        .unwrap();
    assert_eq!(league.current_matchday().unwrap(), 2);

    league
        .store_mut()
        .record_result(10, Score::new(0, 0), Score::new(1, 1), true)
        .unwrap();
    // Season over: stays on the final matchday
    assert_eq!(league.current_matchday().unwrap(), 2);
}

#[test]
fn goals_can_be_replayed_per_fixture() {
    let mut league = sample_league();
    let scorer = tippliga_core::player::Player {
        id: 1,
        team_id: 1,
        name: "Kramer".to_string(),
    };

    league
        .store_mut()
        .insert_goal(1, scorer.clone(), 12, Score::new(1, 0), false, false)
        .unwrap();
    league
        .store_mut()
        .insert_goal(1, scorer, 78, Score::new(1, 1), false, true)
        .unwrap();

    let goals = league.store().goals_for_fixture(1).unwrap();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].score_after, Score::new(1, 0));
    assert!(goals[1].own_goal);
    assert!(league.store().goals_for_fixture(2).unwrap().is_empty());
}
