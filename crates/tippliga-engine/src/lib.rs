pub mod ranking;
pub mod scoring;

use tippliga_core::bet::Bet;
use tippliga_core::store::{BetStore, StoreError, UserStore};
use tippliga_core::user::User;

pub use ranking::{RankedEntry, rank};
pub use scoring::evaluate;

/// Points a single bet is currently worth.
pub fn score_bet(bet: &Bet) -> u32 {
    scoring::evaluate(bet.prediction, bet.fixture.fulltime, bet.fixture.finished)
}

/// Total points a set of bets is worth. Bets on unfinished fixtures
/// contribute nothing.
pub fn total_points(bets: &[Bet]) -> u32 {
    bets.iter().map(score_bet).sum()
}

/// Rank users directly from already-fetched (user, bets) pairs.
pub fn rank_bets(entries: Vec<(User, Vec<Bet>)>) -> Vec<RankedEntry> {
    let totals = entries
        .into_iter()
        .map(|(user, bets)| {
            let points = total_points(&bets);
            (user, points)
        })
        .collect();
    rank(totals)
}

/// Build the leaderboard from everything the store knows.
///
/// Fetches all users and each user's bets, scores them, and returns the
/// ordered table. A store failure aborts the whole computation; no
/// partial table is ever produced.
pub fn generate_ranking<S>(store: &S) -> Result<Vec<RankedEntry>, StoreError>
where
    S: UserStore + BetStore,
{
    let users = store.all_users()?;
    let mut totals = Vec::with_capacity(users.len());

    for user in users {
        let bets = store.bets_for_user(user.id)?;
        let points = total_points(&bets);
        tracing::debug!(user = %user.name, bets = bets.len(), points, "scored user");
        totals.push((user, points));
    }

    Ok(ranking::rank(totals))
}
