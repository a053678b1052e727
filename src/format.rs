//! Score text format: which characters separate sets and games.

use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SET_SEPARATOR: &str = " ";
pub const DEFAULT_GAME_SEPARATOR: &str = ":";

/// Separator between set tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SetSeparator {
    #[default]
    Space,
}

impl SetSeparator {
    pub const ALLOWED: &'static [SetSeparator] = &[SetSeparator::Space];

    pub fn as_str(self) -> &'static str {
        match self {
            SetSeparator::Space => " ",
        }
    }
}

impl FromStr for SetSeparator {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALLOWED
            .iter()
            .copied()
            .find(|sep| sep.as_str() == s)
            .ok_or_else(|| FormatError::InvalidSetSeparator(s.to_string()))
    }
}

/// Separator between the two game counts of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameSeparator {
    #[default]
    Colon,
    Dash,
    Slash,
}

impl GameSeparator {
    pub const ALLOWED: &'static [GameSeparator] =
        &[GameSeparator::Colon, GameSeparator::Dash, GameSeparator::Slash];

    pub fn as_str(self) -> &'static str {
        match self {
            GameSeparator::Colon => ":",
            GameSeparator::Dash => "-",
            GameSeparator::Slash => "/",
        }
    }
}

impl FromStr for GameSeparator {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALLOWED
            .iter()
            .copied()
            .find(|sep| sep.as_str() == s)
            .ok_or_else(|| FormatError::InvalidGameSeparator(s.to_string()))
    }
}

/// Set and game separators used to read and write score text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawFormat", into = "RawFormat")]
pub struct ScoreFormat {
    set_separator: SetSeparator,
    game_separator: GameSeparator,
}

impl ScoreFormat {
    pub fn new(set_separator: &str, game_separator: &str) -> Result<Self, FormatError> {
        Ok(Self {
            set_separator: set_separator.parse()?,
            game_separator: game_separator.parse()?,
        })
    }

    pub fn with_game_separator(game_separator: GameSeparator) -> Self {
        Self {
            set_separator: SetSeparator::Space,
            game_separator,
        }
    }

    pub fn set_separator(&self) -> &'static str {
        self.set_separator.as_str()
    }

    pub fn game_separator(&self) -> &'static str {
        self.game_separator.as_str()
    }
}

impl fmt::Display for ScoreFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "set separator {:?}, game separator {:?}",
            self.set_separator(),
            self.game_separator()
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawFormat {
    set_separator: String,
    game_separator: String,
}

impl TryFrom<RawFormat> for ScoreFormat {
    type Error = FormatError;

    fn try_from(raw: RawFormat) -> Result<Self, Self::Error> {
        ScoreFormat::new(&raw.set_separator, &raw.game_separator)
    }
}

impl From<ScoreFormat> for RawFormat {
    fn from(format: ScoreFormat) -> Self {
        RawFormat {
            set_separator: format.set_separator().to_string(),
            game_separator: format.game_separator().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let format = ScoreFormat::default();
        assert_eq!(format.set_separator(), DEFAULT_SET_SEPARATOR);
        assert_eq!(format.game_separator(), DEFAULT_GAME_SEPARATOR);
    }

    #[test]
    fn test_create_arbitrary_score_format() {
        let format = ScoreFormat::new(" ", "-").unwrap();
        assert_eq!(format.set_separator(), " ");
        assert_eq!(format.game_separator(), "-");
        assert_eq!(format, ScoreFormat::with_game_separator(GameSeparator::Dash));
    }

    #[test]
    fn test_create_with_invalid_set_separator() {
        assert_eq!(
            ScoreFormat::new("_", ":"),
            Err(FormatError::InvalidSetSeparator("_".to_string()))
        );
    }

    #[test]
    fn test_create_with_invalid_game_separator() {
        assert_eq!(
            ScoreFormat::new(" ", "\\"),
            Err(FormatError::InvalidGameSeparator("\\".to_string()))
        );
    }
}
