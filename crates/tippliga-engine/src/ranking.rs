use serde::{Deserialize, Serialize};

use tippliga_core::user::User;

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Leaderboard position, starting at 1.
    pub position: u32,
    pub user: User,
    pub points: u32,
}

/// Order users by total points, best first.
///
/// Repeatedly pulls the entry with the strictly highest total out of an
/// owned working copy. Equal totals keep their input order, because a
/// later entry never displaces an earlier one without being strictly
/// greater. Quadratic, which is fine for league-sized fields.
pub fn rank(totals: Vec<(User, u32)>) -> Vec<RankedEntry> {
    let mut remaining = totals;
    let mut ranked = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let mut best = 0;
        for (index, entry) in remaining.iter().enumerate() {
            if entry.1 > remaining[best].1 {
                best = index;
            }
        }
        let (user, points) = remaining.remove(best);
        ranked.push(RankedEntry {
            position: ranked.len() as u32 + 1,
            user,
            points,
        });
    }

    ranked
}
