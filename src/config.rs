//! Game configuration
//!
//! A `GameConfig` fixes the palette, the code length, the scoring rule and
//! the optional round limit for a session. Oracle and solver each hold a
//! copy so they always agree on the rules.

use crate::core::{Color, Palette, ScoringRule};
use thiserror::Error;

/// Errors raised while building a configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("palette must contain at least one colour")]
    EmptyPalette,

    #[error("colour {0} appears more than once in the palette")]
    DuplicateColor(Color),

    #[error("code length must be between 1 and {palette_size}, got {length}")]
    InvalidCodeLength { length: usize, palette_size: usize },

    #[error("code length {length} exceeds the supported maximum of {max}")]
    CodeTooLong { length: usize, max: usize },

    #[error("unknown scoring rule '{0}' (expected 'compatible' or 'multiset')")]
    UnknownScoringRule(String),
}

/// Rules for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    palette: Palette,
    code_length: usize,
    scoring: ScoringRule,
    max_rounds: Option<usize>,
}

impl GameConfig {
    /// Code length of the classic game
    pub const CLASSIC_LENGTH: usize = 4;

    /// Longest code a `Score` can count pegs for
    pub const MAX_CODE_LENGTH: usize = u8::MAX as usize;

    /// Create a configuration for codes of `code_length` distinct colours
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidCodeLength` if the length is zero or
    /// larger than the palette (secrets never repeat a colour), and
    /// `ConfigError::CodeTooLong` if it exceeds `MAX_CODE_LENGTH`.
    pub fn new(palette: Palette, code_length: usize) -> Result<Self, ConfigError> {
        if code_length > Self::MAX_CODE_LENGTH {
            return Err(ConfigError::CodeTooLong {
                length: code_length,
                max: Self::MAX_CODE_LENGTH,
            });
        }
        if code_length == 0 || code_length > palette.len() {
            return Err(ConfigError::InvalidCodeLength {
                length: code_length,
                palette_size: palette.len(),
            });
        }

        Ok(Self {
            palette,
            code_length,
            scoring: ScoringRule::default(),
            max_rounds: None,
        })
    }

    /// Four pegs out of six colours, compatible scoring, no round limit
    #[must_use]
    pub fn classic() -> Self {
        Self {
            palette: Palette::classic(),
            code_length: Self::CLASSIC_LENGTH,
            scoring: ScoringRule::default(),
            max_rounds: None,
        }
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    /// Fail a session with `RoundLimit` once this many guesses have been made
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn scoring(&self) -> ScoringRule {
        self.scoring
    }

    #[inline]
    #[must_use]
    pub const fn max_rounds(&self) -> Option<usize> {
        self.max_rounds
    }

    /// Number of colours that cannot appear in a secret
    #[inline]
    #[must_use]
    pub fn spare_colors(&self) -> usize {
        self.palette.len() - self.code_length
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
