//! Error types
//!
//! Configuration problems (`RulesError`, `FormatError`) are raised when a rules
//! or format value is built. Parse problems (`ScoreParseError`) come from the
//! standalone parser. Validation failures are never errors: they are returned as
//! [`Validated::Invalid`](crate::pipeline::Validated::Invalid).

use std::num::ParseIntError;
use thiserror::Error;

/// A match rules value outside the supported domains.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("Invalid sets value: {0}")]
    InvalidSets(u32),
    #[error("Invalid games value: {0}")]
    InvalidGames(u32),
    #[error("Invalid last set rule: {0}")]
    InvalidLastSet(String),
    #[error("Invalid tiebreak set target: {0}")]
    InvalidTiebreakSetTarget(u32),
}

/// A separator outside the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid set separator: {0:?}")]
    InvalidSetSeparator(String),
    #[error("Invalid game separator: {0:?}")]
    InvalidGameSeparator(String),
}

/// Failure to read a single set token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token does not split into exactly two game fields.
    #[error("expected two game values in {token:?}")]
    Shape { token: String },
    #[error("game value {value:?} is not a number: {source}")]
    Game {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("tiebreak value {value:?} is not a number: {source}")]
    Tiebreak {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Domain parse error raised by the standalone parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid game value: {score}: {source}")]
pub struct ScoreParseError {
    pub score: String,
    #[source]
    pub source: TokenError,
}

impl ScoreParseError {
    pub fn new(score: impl Into<String>, source: TokenError) -> Self {
        Self {
            score: score.into(),
            source,
        }
    }

    /// True when the failing field was a tiebreak annotation.
    pub fn is_tiebreak(&self) -> bool {
        matches!(self.source, TokenError::Tiebreak { .. })
    }
}

/// Umbrella error for the crate's fallible constructors.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error(transparent)]
    Rules(#[from] RulesError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("failed to compile score grammar: {0}")]
    Grammar(#[from] regex::Error),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
