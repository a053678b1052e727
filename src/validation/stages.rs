//! Validation stages
//!
//! Each stage checks one rule and either passes its input on or rejects the
//! score with a single message. Stages run in this order:
//!
//! 1. [`StructuralMatch`] - the score matches the generated grammar in full
//! 2. [`SetCount`] - the number of sets is within the rules
//! 3. [`SemanticParse`] - every set reads as integers; sets are attached to the value
//! 4. [`WonSetBound`] - neither side won more sets than needed to take the match
//! 5. [`MinimumGames`] - every set reached its game threshold
//! 6. [`GamesInequality`] - no set is level

use crate::format::ScoreFormat;
use crate::grammar::ScoreGrammar;
use crate::parsing::tokenize_score;
use crate::pipeline::{Runnable, Validated};
use crate::rules::MatchRules;
use crate::score::{won_sets, SetScore};
use std::sync::Arc;

pub const INVALID_FORMAT: &str = "Score has invalid format";
pub const TOO_MANY_SETS: &str = "Number of sets is too large";
pub const TOO_FEW_SETS: &str = "Number of sets is too small";
pub const UNPARSEABLE: &str = "Unable to parse the score";
pub const TOO_MANY_WON_SETS: &str = "Number of won sets is too large";

/// Score text together with its parsed sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScore {
    pub text: String,
    pub sets: Vec<SetScore>,
}

/// Full match against the compiled grammar.
pub struct StructuralMatch {
    grammar: Arc<ScoreGrammar>,
}

impl StructuralMatch {
    pub fn new(grammar: Arc<ScoreGrammar>) -> Self {
        Self { grammar }
    }
}

impl Runnable<String, String> for StructuralMatch {
    fn name(&self) -> &'static str {
        "structural-match"
    }

    fn run(&self, input: String) -> Validated<String> {
        if self.grammar.is_match(&input) {
            Validated::Valid(input)
        } else {
            Validated::invalid(INVALID_FORMAT)
        }
    }
}

/// Set count between the majority threshold and the maximum.
pub struct SetCount {
    rules: MatchRules,
    format: ScoreFormat,
}

impl SetCount {
    pub fn new(rules: MatchRules, format: ScoreFormat) -> Self {
        Self { rules, format }
    }
}

impl Runnable<String, String> for SetCount {
    fn name(&self) -> &'static str {
        "set-count"
    }

    fn run(&self, input: String) -> Validated<String> {
        let count = input.split(self.format.set_separator()).count() as u32;
        if count > self.rules.max_sets() {
            Validated::invalid(TOO_MANY_SETS)
        } else if count < self.rules.majority_threshold() {
            Validated::invalid(TOO_FEW_SETS)
        } else {
            Validated::Valid(input)
        }
    }
}

/// Reads every set with the shared tokenizer.
pub struct SemanticParse {
    format: ScoreFormat,
}

impl SemanticParse {
    pub fn new(format: ScoreFormat) -> Self {
        Self { format }
    }
}

impl Runnable<String, ParsedScore> for SemanticParse {
    fn name(&self) -> &'static str {
        "semantic-parse"
    }

    fn run(&self, input: String) -> Validated<ParsedScore> {
        let sets: Result<Vec<SetScore>, _> = tokenize_score(&input, &self.format)
            .and_then(|tokens| tokens.iter().map(|token| token.to_score()).collect());
        match sets {
            Ok(sets) => Validated::Valid(ParsedScore { text: input, sets }),
            Err(_) => Validated::invalid(UNPARSEABLE),
        }
    }
}

/// Neither side may win more sets than the majority threshold.
pub struct WonSetBound {
    rules: MatchRules,
}

impl WonSetBound {
    pub fn new(rules: MatchRules) -> Self {
        Self { rules }
    }
}

impl Runnable<ParsedScore, ParsedScore> for WonSetBound {
    fn name(&self) -> &'static str {
        "won-set-bound"
    }

    fn run(&self, input: ParsedScore) -> Validated<ParsedScore> {
        let majority = self.rules.majority_threshold();
        let (unit_one, unit_two) = won_sets(&input.sets);
        if unit_one > majority || unit_two > majority {
            Validated::invalid(TOO_MANY_WON_SETS)
        } else {
            Validated::Valid(input)
        }
    }
}

/// At least one side must reach the set's game threshold.
///
/// Under a tiebreak set rule the last set of the score is held to the tiebreak
/// set target. Every other set needs the games count.
pub struct MinimumGames {
    rules: MatchRules,
}

impl MinimumGames {
    pub fn new(rules: MatchRules) -> Self {
        Self { rules }
    }

    fn threshold(&self, index: usize, played: usize) -> u32 {
        if self.rules.plays_tiebreak_set() && index == played {
            self.rules.tiebreak_set_target()
        } else {
            self.rules.games_per_set()
        }
    }
}

impl Runnable<ParsedScore, ParsedScore> for MinimumGames {
    fn name(&self) -> &'static str {
        "minimum-games"
    }

    fn run(&self, input: ParsedScore) -> Validated<ParsedScore> {
        let played = input.sets.len();
        for (index, set) in (1..).zip(&input.sets) {
            let threshold = self.threshold(index, played);
            if set.unit_one_games < threshold && set.unit_two_games < threshold {
                return Validated::invalid(format!(
                    "Set {index} has invalid number of games: value is too small"
                ));
            }
        }
        Validated::Valid(input)
    }
}

/// No set may end level.
pub struct GamesInequality;

impl Runnable<ParsedScore, ParsedScore> for GamesInequality {
    fn name(&self) -> &'static str {
        "games-inequality"
    }

    fn run(&self, input: ParsedScore) -> Validated<ParsedScore> {
        match (1..)
            .zip(&input.sets)
            .find(|(_, set)| set.unit_one_games == set.unit_two_games)
        {
            Some((index, _)) => Validated::invalid(format!(
                "Set {index} has invalid number of games: games cannot be equal"
            )),
            None => Validated::Valid(input),
        }
    }
}
