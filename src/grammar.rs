//! Score Grammar
//!
//! Builds the structural regular expression a score string must match for a
//! given pair of [`MatchRules`] and [`ScoreFormat`].
//!
//! # Pattern Structure
//!
//! A match is a sequence of set slots. The first `max_sets / 2 + 1` slots are
//! required (a match cannot end sooner), the rest are optional:
//!
//! - required slot: `[0-G]:[0-G](\(\d+\))?` where `G = games_per_set + 1`
//! - optional slot: `( [0-G]:[0-G](\(\d+\))?)?`
//! - tiebreak set tail: `( \d+:\d+)?`, replacing the final optional slot when the
//!   last set is a tiebreak set. Its game fields are unbounded since the target
//!   can exceed one digit, and it never carries a tiebreak annotation.
//!
//! Required slots are joined with the set separator; optional slots carry their
//! own leading separator and are appended directly.
//!
//! The game bound is a structural gate only. The validation stages re-check the
//! exact thresholds.

use crate::format::ScoreFormat;
use crate::rules::{LastSetPolicy, MatchRules};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Annotation recording the tiebreak points of a set, e.g. `(7)`.
pub const TIEBREAK_ANNOTATION_PATTERN: &str = r"(\(\d+\))?";

/// One set slot of a match pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetPattern {
    Required,
    Optional,
    TiebreakSetTail,
}

impl SetPattern {
    fn render(self, rules: &MatchRules, format: &ScoreFormat) -> String {
        let set_sep = format.set_separator();
        match self {
            SetPattern::Required => ordinary_set(rules, format),
            SetPattern::Optional => format!("({}{})?", set_sep, ordinary_set(rules, format)),
            SetPattern::TiebreakSetTail => {
                format!(r"({}\d+{}\d+)?", set_sep, format.game_separator())
            }
        }
    }
}

fn ordinary_set(rules: &MatchRules, format: &ScoreFormat) -> String {
    let games = rules.games_per_set() + 1;
    let sep = format.game_separator();
    format!("[0-{games}]{sep}[0-{games}]{TIEBREAK_ANNOTATION_PATTERN}")
}

/// Lay out the set slots for `rules`, in order.
pub fn set_patterns(rules: &MatchRules) -> Vec<SetPattern> {
    let required = rules.majority_threshold();
    let mut patterns: Vec<SetPattern> = (0..rules.max_sets())
        .map(|slot| {
            if slot < required {
                SetPattern::Required
            } else {
                SetPattern::Optional
            }
        })
        .collect();

    if rules.last_set() == LastSetPolicy::TiebreakSet {
        match patterns.last_mut() {
            Some(last) if *last == SetPattern::Optional => *last = SetPattern::TiebreakSetTail,
            _ => patterns.push(SetPattern::TiebreakSetTail),
        }
    }

    patterns
}

/// Build the unanchored structural pattern for `rules` and `format`.
pub fn build_pattern(rules: &MatchRules, format: &ScoreFormat) -> String {
    let patterns = set_patterns(rules);

    let required: Vec<String> = patterns
        .iter()
        .filter(|p| **p == SetPattern::Required)
        .map(|p| p.render(rules, format))
        .collect();
    let optional: String = patterns
        .iter()
        .filter(|p| **p != SetPattern::Required)
        .map(|p| p.render(rules, format))
        .collect();

    format!("{}{}", required.join(format.set_separator()), optional)
}

/// Compiled, anchored score grammar. Read-only once built.
#[derive(Debug)]
pub struct ScoreGrammar {
    pattern: String,
    regex: Regex,
}

/// Everything the pattern depends on. The tiebreak set target only matters
/// to validation, so it is left out.
type GrammarKey = (u32, u32, LastSetPolicy, ScoreFormat);

fn grammar_key(rules: &MatchRules, format: &ScoreFormat) -> GrammarKey {
    (rules.max_sets(), rules.games_per_set(), rules.last_set(), *format)
}

static GRAMMAR_CACHE: Lazy<RwLock<HashMap<GrammarKey, Arc<ScoreGrammar>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

impl ScoreGrammar {
    /// Compile a fresh grammar, anchored at both ends.
    pub fn compile(rules: &MatchRules, format: &ScoreFormat) -> Result<Self, regex::Error> {
        let pattern = build_pattern(rules, format);
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        tracing::trace!(%pattern, "compiled score grammar");
        Ok(Self { pattern, regex })
    }

    /// Shared grammar for this configuration, compiled at most once.
    pub fn cached(rules: &MatchRules, format: &ScoreFormat) -> Result<Arc<Self>, regex::Error> {
        let key = grammar_key(rules, format);
        if let Some(grammar) = GRAMMAR_CACHE
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(grammar));
        }

        let mut cache = GRAMMAR_CACHE.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(grammar) = cache.get(&key) {
            return Ok(Arc::clone(grammar));
        }
        let grammar = Arc::new(Self::compile(rules, format)?);
        cache.insert(key, Arc::clone(&grammar));
        Ok(grammar)
    }

    /// The unanchored pattern, as returned by [`build_pattern`].
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether `score` matches the grammar in full.
    pub fn is_match(&self, score: &str) -> bool {
        self.regex.is_match(score)
    }
}
