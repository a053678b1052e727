//! # tennis-score
//!
//! Validation, parsing and stats for textual tennis match scores such as
//! `6:4 6:2` or `6:7(5) 7:6(10)`.
//!
//! Data flows one way:
//!
//! ```text
//! MatchRules + ScoreFormat → grammar → validation → parsing → stats
//! ```
//!
//! - [`rules`] and [`format`] describe the match format and the score text layout
//! - [`grammar`] builds the structural regex for a given format
//! - [`pipeline`] holds the fail-fast [`Validated`] chain the stages run on
//! - [`validation`] checks a score against the grammar and the match rules
//! - [`parsing`] reads validated text into [`SetScore`]s and reverses scores
//! - [`stats`] derives set and game differentials
//! - [`config`] loads rules and format from layered TOML

pub mod config;
pub mod error;
pub mod format;
pub mod grammar;
pub mod parsing;
pub mod pipeline;
pub mod rules;
pub mod score;
pub mod stats;
pub mod validation;

pub use error::{FormatError, RulesError, ScoreError, ScoreParseError, TokenError};
pub use format::{GameSeparator, ScoreFormat, SetSeparator};
pub use grammar::{build_pattern, ScoreGrammar};
pub use parsing::{parse_score, reverse_score, ScoreParser};
pub use pipeline::Validated;
pub use rules::{GamesCount, LastSetPolicy, MatchRules, SetsCount};
pub use score::{MatchStats, ParseResult, SetScore, Unit};
pub use stats::compute_stats;
pub use validation::{validate, ScoreValidator};
