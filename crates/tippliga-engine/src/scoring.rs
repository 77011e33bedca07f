use tippliga_core::score::Score;

/// Points for predicting the final score exactly.
pub const EXACT_POINTS: u32 = 4;
/// Points for the right goal difference in a decided match.
pub const DIFFERENCE_POINTS: u32 = 3;
/// Points for the right tendency (home win, draw, away win).
pub const TENDENCY_POINTS: u32 = 2;
/// Extra point whenever one side's goal count is hit exactly.
pub const SIDE_BONUS: u32 = 1;
/// Highest value a single bet can reach. An exact hit matches both goal
/// counts, so it always carries the bonus.
pub const MAX_POINTS: u32 = EXACT_POINTS + SIDE_BONUS;

/// Evaluate a prediction against a match result.
///
/// Scoring rules:
/// - Exact final score: 4
/// - Correct goal difference, match decided: 3
/// - Correct goal difference in a draw, or correct tendency: 2
/// - Plus 1 whenever the home or away goal count matches exactly
/// - An unfinished match is worth 0, whatever its current score is
pub fn evaluate(prediction: Score, result: Score, finished: bool) -> u32 {
    if !finished {
        return 0;
    }

    let bonus = u32::from(prediction.home == result.home || prediction.away == result.away);

    if prediction == result {
        return EXACT_POINTS + bonus;
    }

    if prediction.difference() == result.difference() {
        // Every predicted draw shares the goal difference of an actual
        // draw, so a drawn match can only earn tendency points here.
        return if result.is_draw() {
            TENDENCY_POINTS + bonus
        } else {
            DIFFERENCE_POINTS + bonus
        };
    }

    if prediction.tendency() == result.tendency() {
        return TENDENCY_POINTS + bonus;
    }

    bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_hit_carries_bonus() {
        // 2:1 on 2:1 — exact (4) + bonus (1)
        assert_eq!(evaluate(Score::new(2, 1), Score::new(2, 1), true), 5);
    }

    #[test]
    fn goalless_draw_is_still_exact() {
        // Bonus applies even at zero goals
        assert_eq!(evaluate(Score::new(0, 0), Score::new(0, 0), true), 5);
    }

    #[test]
    fn correct_difference_in_decided_match() {
        // 2:0 on 3:1 — both +2, neither goal count matches
        assert_eq!(evaluate(Score::new(2, 0), Score::new(3, 1), true), 3);
    }

    #[test]
    fn correct_difference_in_draw() {
        // 2:2 on 1:1 — a predicted draw is only ever a tendency hit
        assert_eq!(evaluate(Score::new(2, 2), Score::new(1, 1), true), 2);
    }

    #[test]
    fn tendency_with_side_bonus() {
        // 1:0 on 2:0 — home win (2) + away count matches (1)
        assert_eq!(evaluate(Score::new(1, 0), Score::new(2, 0), true), 3);
    }

    #[test]
    fn side_bonus_alone() {
        // 1:0 on 0:0 — only the away count matches
        assert_eq!(evaluate(Score::new(1, 0), Score::new(0, 0), true), 1);
    }

    #[test]
    fn nothing_right() {
        // 0:3 on 1:0 — wrong tendency, wrong counts
        assert_eq!(evaluate(Score::new(0, 3), Score::new(1, 0), true), 0);
    }

    #[test]
    fn near_miss_draw() {
        // 1:1 on 0:0 — right difference, wrong counts
        assert_eq!(evaluate(Score::new(1, 1), Score::new(0, 0), true), 2);
    }

    #[test]
    fn unfinished_match_scores_zero() {
        assert_eq!(evaluate(Score::new(1, 1), Score::new(1, 1), false), 0);
        assert_eq!(evaluate(Score::new(3, 0), Score::new(3, 0), false), 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_exceeds_max(
                ph in 0u32..12, pa in 0u32..12,
                rh in 0u32..12, ra in 0u32..12,
                finished in proptest::bool::ANY,
            ) {
                let points = evaluate(Score::new(ph, pa), Score::new(rh, ra), finished);
                prop_assert!(points <= MAX_POINTS);
            }

            #[test]
            fn unfinished_is_always_zero(
                ph in 0u32..12, pa in 0u32..12,
                rh in 0u32..12, ra in 0u32..12,
            ) {
                prop_assert_eq!(evaluate(Score::new(ph, pa), Score::new(rh, ra), false), 0);
            }

            #[test]
            fn exact_prediction_scores_max(h in 0u32..12, a in 0u32..12) {
                prop_assert_eq!(evaluate(Score::new(h, a), Score::new(h, a), true), MAX_POINTS);
            }

            #[test]
            fn evaluation_is_deterministic(
                ph in 0u32..12, pa in 0u32..12,
                rh in 0u32..12, ra in 0u32..12,
            ) {
                let first = evaluate(Score::new(ph, pa), Score::new(rh, ra), true);
                let second = evaluate(Score::new(ph, pa), Score::new(rh, ra), true);
                prop_assert_eq!(first, second);
            }
        }
    }
}
