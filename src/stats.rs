//! Match statistics

use crate::rules::MatchRules;
use crate::score::{won_sets, MatchStats, SetScore, Unit};

/// Derive set and game differentials for `sets` played under `rules`.
///
/// When a match under a tiebreak set rule went the full distance, its last set
/// was played to points. That set adds `+1` or `-1` to the games differential
/// for whoever won it instead of its raw margin.
pub fn compute_stats(sets: &[SetScore], rules: &MatchRules) -> MatchStats {
    let (unit_one_sets, unit_two_sets) = won_sets(sets);
    let sets_diff = i64::from(unit_one_sets) - i64::from(unit_two_sets);
    let went_the_distance = sets.len() == rules.max_sets() as usize;

    let games_diff = match sets.split_last() {
        Some((last, played)) if rules.plays_tiebreak_set() && went_the_distance => {
            let tiebreak_set = match last.winner() {
                Some(Unit::One) => 1,
                _ => -1,
            };
            games_margin(played) + tiebreak_set
        }
        _ => games_margin(sets),
    };

    MatchStats {
        unit_one_sets_diff: sets_diff,
        unit_two_sets_diff: -sets_diff,
        unit_one_games_diff: games_diff,
        unit_two_games_diff: -games_diff,
    }
}

fn games_margin(sets: &[SetScore]) -> i64 {
    sets.iter().map(SetScore::margin).sum()
}
