//! Score validation
//!
//! [`ScoreValidator`] runs a score through the [stages](stages) in order and
//! returns the first failure, or the score itself when every stage passes.
//! Malformed input never produces an error, only [`Validated::Invalid`].
//!
//! The validator holds no per-call state. The parsed sets a later stage needs
//! travel through the pipeline inside [`ParsedScore`], so one validator can be
//! shared across threads.

pub mod stages;

use crate::error::ScoreError;
use crate::format::ScoreFormat;
use crate::grammar::ScoreGrammar;
use crate::pipeline::{Pipeline, Validated};
use crate::rules::MatchRules;
use std::sync::Arc;

pub use stages::{
    GamesInequality, MinimumGames, ParsedScore, SemanticParse, SetCount, StructuralMatch,
    WonSetBound, INVALID_FORMAT,
};

/// Validator for scores under one rules/format pair.
#[derive(Debug)]
pub struct ScoreValidator {
    rules: MatchRules,
    format: ScoreFormat,
    grammar: Arc<ScoreGrammar>,
    pipeline: Pipeline<String, ParsedScore>,
}

impl ScoreValidator {
    pub fn new(rules: MatchRules, format: ScoreFormat) -> Result<Self, ScoreError> {
        let grammar = ScoreGrammar::cached(&rules, &format)?;
        let pipeline = Pipeline::from_fn(|score: String| Validated::Valid(score))
            .then(StructuralMatch::new(Arc::clone(&grammar)))
            .then(SetCount::new(rules, format))
            .then(SemanticParse::new(format))
            .then(WonSetBound::new(rules))
            .then(MinimumGames::new(rules))
            .then(GamesInequality);

        Ok(Self {
            rules,
            format,
            grammar,
            pipeline,
        })
    }

    /// Validate `score`, returning it unchanged when it passes.
    pub fn validate(&self, score: &str) -> Validated<String> {
        self.validate_parsed(score).map(|parsed| parsed.text)
    }

    /// Validate `score`, keeping the sets read along the way.
    pub fn validate_parsed(&self, score: &str) -> Validated<ParsedScore> {
        self.pipeline.run(score.to_string())
    }

    /// Validate raw input, which must first of all be text.
    pub fn validate_bytes(&self, input: &[u8]) -> Validated<String> {
        match std::str::from_utf8(input) {
            Ok(score) => self.validate(score),
            Err(_) => Validated::invalid(INVALID_FORMAT),
        }
    }

    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    pub fn format(&self) -> &ScoreFormat {
        &self.format
    }

    /// The structural pattern scores are matched against.
    pub fn pattern(&self) -> &str {
        self.grammar.pattern()
    }
}

/// Validate `score` under `rules` and `format` in one call.
pub fn validate(
    rules: &MatchRules,
    format: &ScoreFormat,
    score: &str,
) -> Result<Validated<String>, ScoreError> {
    Ok(ScoreValidator::new(*rules, *format)?.validate(score))
}
