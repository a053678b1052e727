//! Match rules
//!
//! The set count and games count domains are enumerated types whose variants
//! carry their integer meaning. Integer conversions are the only place a value
//! can fall outside the domain, and they reject it with [`RulesError`].
//!
//! The ordinary-set game bound in the grammar is a single-digit character
//! class, so `games_per_set + 1` must stay at or below 9. Both supported games
//! counts satisfy this.

use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Points needed to win a match-deciding tiebreak set.
pub const TIEBREAK_SET_POINTS_TO_WIN: u32 = 10;

/// Maximum number of sets in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SetsCount {
    One = 1,
    Three = 3,
    Five = 5,
}

impl SetsCount {
    pub fn get(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for SetsCount {
    type Error = RulesError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SetsCount::One),
            3 => Ok(SetsCount::Three),
            5 => Ok(SetsCount::Five),
            other => Err(RulesError::InvalidSets(other)),
        }
    }
}

impl From<SetsCount> for u32 {
    fn from(value: SetsCount) -> Self {
        value.get()
    }
}

/// Games needed to win an ordinary set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum GamesCount {
    Four = 4,
    Six = 6,
}

impl GamesCount {
    pub fn get(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for GamesCount {
    type Error = RulesError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(GamesCount::Four),
            6 => Ok(GamesCount::Six),
            other => Err(RulesError::InvalidGames(other)),
        }
    }
}

impl From<GamesCount> for u32 {
    fn from(value: GamesCount) -> Self {
        value.get()
    }
}

/// How the final set of a match is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LastSetPolicy {
    /// Ordinary set with a tiebreak game at 6-6.
    TiebreakGame,
    /// A whole set played to [`MatchRules::tiebreak_set_target`] points.
    TiebreakSet,
    /// Ordinary set played out without a tiebreak.
    NoTiebreak,
}

impl LastSetPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            LastSetPolicy::TiebreakGame => "tiebreak-game",
            LastSetPolicy::TiebreakSet => "tiebreak-set",
            LastSetPolicy::NoTiebreak => "no-tiebreak",
        }
    }
}

impl fmt::Display for LastSetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LastSetPolicy {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiebreak-game" => Ok(LastSetPolicy::TiebreakGame),
            "tiebreak-set" => Ok(LastSetPolicy::TiebreakSet),
            "no-tiebreak" => Ok(LastSetPolicy::NoTiebreak),
            other => Err(RulesError::InvalidLastSet(other.to_string())),
        }
    }
}

/// Immutable description of a match format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRules", into = "RawRules")]
pub struct MatchRules {
    max_sets: SetsCount,
    games_per_set: GamesCount,
    last_set: LastSetPolicy,
    tiebreak_set_target: u32,
}

impl MatchRules {
    pub fn new(max_sets: SetsCount, games_per_set: GamesCount, last_set: LastSetPolicy) -> Self {
        Self {
            max_sets,
            games_per_set,
            last_set,
            tiebreak_set_target: TIEBREAK_SET_POINTS_TO_WIN,
        }
    }

    /// Build rules from raw integers, rejecting anything outside the domains.
    pub fn try_new(
        max_sets: u32,
        games_per_set: u32,
        last_set: LastSetPolicy,
        tiebreak_set_target: u32,
    ) -> Result<Self, RulesError> {
        Self::new(
            SetsCount::try_from(max_sets)?,
            GamesCount::try_from(games_per_set)?,
            last_set,
        )
        .with_tiebreak_set_target(tiebreak_set_target)
    }

    pub fn with_tiebreak_set_target(mut self, target: u32) -> Result<Self, RulesError> {
        if target == 0 {
            return Err(RulesError::InvalidTiebreakSetTarget(target));
        }
        self.tiebreak_set_target = target;
        Ok(self)
    }

    /// Best of three, six-game sets, tiebreak game in every set.
    pub fn pro_tour() -> Self {
        Self::new(SetsCount::Three, GamesCount::Six, LastSetPolicy::TiebreakGame)
    }

    /// Best of three with a tiebreak set instead of a third set.
    pub fn club() -> Self {
        Self::new(SetsCount::Three, GamesCount::Six, LastSetPolicy::TiebreakSet)
    }

    /// A single six-game set.
    pub fn club_short() -> Self {
        Self::new(SetsCount::One, GamesCount::Six, LastSetPolicy::TiebreakGame)
    }

    /// Best of five, six-game sets.
    pub fn grand_slam() -> Self {
        Self::new(SetsCount::Five, GamesCount::Six, LastSetPolicy::TiebreakGame)
    }

    pub fn max_sets(&self) -> u32 {
        self.max_sets.get()
    }

    pub fn games_per_set(&self) -> u32 {
        self.games_per_set.get()
    }

    pub fn last_set(&self) -> LastSetPolicy {
        self.last_set
    }

    pub fn tiebreak_set_target(&self) -> u32 {
        self.tiebreak_set_target
    }

    /// Sets a side must win to take the match.
    pub fn majority_threshold(&self) -> u32 {
        self.max_sets() / 2 + 1
    }

    /// Whether the deciding set is played as a points tiebreak.
    pub fn plays_tiebreak_set(&self) -> bool {
        self.last_set == LastSetPolicy::TiebreakSet
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self::pro_tour()
    }
}

/// Serialized shape of [`MatchRules`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRules {
    max_sets: u32,
    games_per_set: u32,
    last_set: LastSetPolicy,
    #[serde(default = "default_tiebreak_set_target")]
    tiebreak_set_target: u32,
}

fn default_tiebreak_set_target() -> u32 {
    TIEBREAK_SET_POINTS_TO_WIN
}

impl TryFrom<RawRules> for MatchRules {
    type Error = RulesError;

    fn try_from(raw: RawRules) -> Result<Self, Self::Error> {
        MatchRules::try_new(
            raw.max_sets,
            raw.games_per_set,
            raw.last_set,
            raw.tiebreak_set_target,
        )
    }
}

impl From<MatchRules> for RawRules {
    fn from(rules: MatchRules) -> Self {
        RawRules {
            max_sets: rules.max_sets(),
            games_per_set: rules.games_per_set(),
            last_set: rules.last_set,
            tiebreak_set_target: rules.tiebreak_set_target,
        }
    }
}
