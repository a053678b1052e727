//! Configuration loading
//!
//! Rules and format come from TOML. A baseline file ships inside the crate
//! (`defaults/tennis.default.toml`) and every [`Loader`] starts from it, so a
//! user file only needs the keys it changes. Unsupported values surface as a
//! [`ConfigError`] from [`Loader::build`].

use crate::error::ScoreError;
use crate::format::ScoreFormat;
use crate::parsing::ScoreParser;
use crate::rules::MatchRules;
use crate::validation::ScoreValidator;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, FileSourceFile, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/tennis.default.toml");

/// Match rules and score format read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TennisConfig {
    pub rules: MatchRules,
    pub format: ScoreFormat,
}

impl TennisConfig {
    pub fn validator(&self) -> Result<ScoreValidator, ScoreError> {
        ScoreValidator::new(self.rules, self.format)
    }

    pub fn parser(&self) -> ScoreParser {
        ScoreParser::new(self.rules, self.format)
    }
}

/// Layered source of [`TennisConfig`].
///
/// Sources apply in the order they are added, each one overriding the keys it
/// sets. The embedded defaults always come first.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

fn toml_file(path: &Path, required: bool) -> File<FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml).required(required)
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Add a TOML file; `build` fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add(toml_file(path.as_ref(), true))
    }

    /// Add a TOML file that is skipped when missing.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.add(toml_file(path.as_ref(), false))
    }

    /// Add TOML held in memory.
    pub fn with_toml(self, content: &str) -> Self {
        self.add(File::from_str(content, FileFormat::Toml))
    }

    /// Set one dotted key, e.g. `rules.max_sets`, above every source.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and read the rules and format out of them.
    pub fn build(self) -> Result<TennisConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn add<S>(mut self, source: S) -> Self
    where
        S: config::Source + Send + Sync + 'static,
    {
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Rules and format from the embedded defaults alone.
pub fn load_defaults() -> Result<TennisConfig, ConfigError> {
    Loader::new().build()
}

/// Build a validator from a TOML file layered over the defaults.
pub fn validator_from_file(path: impl AsRef<Path>) -> Result<ScoreValidator, ScoreError> {
    Loader::new().with_file(path).build()?.validator()
}
