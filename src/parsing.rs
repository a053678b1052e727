//! Score Parsing
//!
//! The set tokenizer here is shared by the validation pipeline and the
//! standalone parser. It works in two steps:
//!
//! 1. [`tokenize_set`] splits a set token such as `7:6(5)` into borrowed fields
//!    (`"7"`, `"6"`, `Some("5")`) without interpreting them.
//! 2. [`SetToken::to_score`] converts the fields into a [`SetScore`].
//!
//! Keeping the fields as text lets [`reverse_score`] swap the game counts while
//! reproducing every other character of the input unchanged.

use crate::error::{ScoreParseError, TokenError};
use crate::format::ScoreFormat;
use crate::rules::MatchRules;
use crate::score::{ParseResult, SetScore};
use crate::stats::compute_stats;

/// Borrowed fields of one set token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetToken<'a> {
    pub unit_one: &'a str,
    pub unit_two: &'a str,
    pub tiebreak: Option<&'a str>,
}

impl SetToken<'_> {
    pub fn to_score(&self) -> Result<SetScore, TokenError> {
        let score = SetScore::new(parse_game(self.unit_one)?, parse_game(self.unit_two)?);
        match self.tiebreak {
            Some(points) => Ok(score.with_tiebreak(parse_tiebreak(points)?)),
            None => Ok(score),
        }
    }

    /// The same set seen from the other side. The annotation stays as is.
    pub fn swapped(self) -> Self {
        Self {
            unit_one: self.unit_two,
            unit_two: self.unit_one,
            tiebreak: self.tiebreak,
        }
    }

    pub fn render(&self, game_separator: &str) -> String {
        match self.tiebreak {
            Some(points) => format!(
                "{}{}{}({})",
                self.unit_one, game_separator, self.unit_two, points
            ),
            None => format!("{}{}{}", self.unit_one, game_separator, self.unit_two),
        }
    }
}

fn parse_game(value: &str) -> Result<u32, TokenError> {
    value.parse().map_err(|source| TokenError::Game {
        value: value.to_string(),
        source,
    })
}

fn parse_tiebreak(value: &str) -> Result<u32, TokenError> {
    value.parse().map_err(|source| TokenError::Tiebreak {
        value: value.to_string(),
        source,
    })
}

/// Strip a trailing `(...)` annotation, returning the games part and its body.
fn split_tiebreak(token: &str) -> (&str, Option<&str>) {
    if let Some(body) = token.strip_suffix(')') {
        if let Some(open) = body.rfind('(') {
            return (&body[..open], Some(&body[open + 1..]));
        }
    }
    (token, None)
}

/// Split one set token into its game fields and optional tiebreak annotation.
pub fn tokenize_set<'a>(token: &'a str, game_separator: &str) -> Result<SetToken<'a>, TokenError> {
    let (games, tiebreak) = split_tiebreak(token);
    let mut fields = games.split(game_separator);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(unit_one), Some(unit_two), None) => Ok(SetToken {
            unit_one,
            unit_two,
            tiebreak,
        }),
        _ => Err(TokenError::Shape {
            token: token.to_string(),
        }),
    }
}

/// Tokenize every set of `score`, in order.
pub fn tokenize_score<'a>(
    score: &'a str,
    format: &ScoreFormat,
) -> Result<Vec<SetToken<'a>>, TokenError> {
    score
        .split(format.set_separator())
        .map(|token| tokenize_set(token, format.game_separator()))
        .collect()
}

/// Parse `score` into per-set scores.
pub fn parse_score(score: &str, format: &ScoreFormat) -> Result<Vec<SetScore>, ScoreParseError> {
    tokenize_score(score, format)
        .and_then(|tokens| tokens.iter().map(SetToken::to_score).collect())
        .map_err(|source| ScoreParseError::new(score, source))
}

/// Swap the two sides of every set in `score`.
///
/// Tiebreak annotations are reattached unchanged, so reversing twice gives back
/// the original text.
pub fn reverse_score(score: &str, format: &ScoreFormat) -> Result<String, ScoreParseError> {
    let tokens =
        tokenize_score(score, format).map_err(|source| ScoreParseError::new(score, source))?;
    let mut reversed = Vec::with_capacity(tokens.len());
    for token in tokens {
        token
            .to_score()
            .map_err(|source| ScoreParseError::new(score, source))?;
        reversed.push(token.swapped().render(format.game_separator()));
    }
    Ok(reversed.join(format.set_separator()))
}

/// Parser producing sets and stats for a score under fixed rules.
///
/// The score is expected to have passed validation already; a score that
/// cannot be read fails with [`ScoreParseError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreParser {
    format: ScoreFormat,
    rules: MatchRules,
}

impl ScoreParser {
    pub fn new(rules: MatchRules, format: ScoreFormat) -> Self {
        Self { format, rules }
    }

    pub fn parse(&self, score: &str) -> Result<ParseResult, ScoreParseError> {
        let sets = parse_score(score, &self.format)?;
        let stats = compute_stats(&sets, &self.rules);
        Ok(ParseResult { sets, stats })
    }

    pub fn reverse(&self, score: &str) -> Result<String, ScoreParseError> {
        reverse_score(score, &self.format)
    }
}
