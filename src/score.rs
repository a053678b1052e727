//! Parsed score data

use serde::{Deserialize, Serialize};

/// One of the two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    One,
    Two,
}

/// Games of a single set, with the tiebreak annotation when one was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub unit_one_games: u32,
    pub unit_two_games: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak: Option<u32>,
}

impl SetScore {
    pub fn new(unit_one_games: u32, unit_two_games: u32) -> Self {
        Self {
            unit_one_games,
            unit_two_games,
            tiebreak: None,
        }
    }

    pub fn with_tiebreak(mut self, points: u32) -> Self {
        self.tiebreak = Some(points);
        self
    }

    /// The side with more games, or `None` for a level set.
    pub fn winner(&self) -> Option<Unit> {
        match self.unit_one_games.cmp(&self.unit_two_games) {
            std::cmp::Ordering::Greater => Some(Unit::One),
            std::cmp::Ordering::Less => Some(Unit::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Unit one's game margin in this set.
    pub fn margin(&self) -> i64 {
        i64::from(self.unit_one_games) - i64::from(self.unit_two_games)
    }
}

/// Set and game differentials from each side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchStats {
    pub unit_one_sets_diff: i64,
    pub unit_two_sets_diff: i64,
    pub unit_one_games_diff: i64,
    pub unit_two_games_diff: i64,
}

/// Sets of a parsed score together with their stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub sets: Vec<SetScore>,
    pub stats: MatchStats,
}

/// Count the sets won by each side, level sets counting for neither.
pub fn won_sets(sets: &[SetScore]) -> (u32, u32) {
    sets.iter()
        .fold((0, 0), |(one, two), set| match set.winner() {
            Some(Unit::One) => (one + 1, two),
            Some(Unit::Two) => (one, two + 1),
            None => (one, two),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_winner() {
        assert_eq!(SetScore::new(6, 4).winner(), Some(Unit::One));
        assert_eq!(SetScore::new(6, 7).with_tiebreak(5).winner(), Some(Unit::Two));
        assert_eq!(SetScore::new(6, 6).winner(), None);
    }

    #[test]
    fn test_margin_is_signed() {
        assert_eq!(SetScore::new(6, 2).margin(), 4);
        assert_eq!(SetScore::new(0, 6).margin(), -6);
        assert_eq!(SetScore::new(0, u32::MAX).margin(), -i64::from(u32::MAX));
    }

    #[test]
    fn test_won_sets_skips_level_sets() {
        let sets = [SetScore::new(3, 6), SetScore::new(6, 6), SetScore::new(6, 2)];
        assert_eq!(won_sets(&sets), (1, 1));
    }
}
