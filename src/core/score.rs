//! Peg scoring
//!
//! A score counts red pegs (right colour, right position) and white pegs
//! (right colour, wrong position). Two rules are supported:
//!
//! - `Compatible`: a guessed colour that is not an exact match earns a white
//!   peg whenever it appears anywhere in the secret. Secrets never repeat a
//!   colour, so this is exact for duplicate-free guesses, but a guess that
//!   repeats a colour can collect several white pegs for one secret peg.
//! - `Multiset`: standard Mastermind. Each secret peg is matched at most once.

use super::Code;
use crate::config::ConfigError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub red: u8,
    pub white: u8,
}

impl Score {
    #[must_use]
    pub const fn new(red: u8, white: u8) -> Self {
        Self { red, white }
    }

    /// Number of guessed colours present in the secret
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.red + self.white
    }

    /// Every position matched
    #[inline]
    #[must_use]
    pub const fn is_solved(self, code_length: usize) -> bool {
        self.red as usize == code_length
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r={} w={}", self.red, self.white)
    }
}

/// How white pegs are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    /// Membership test against the whole secret (play-log compatible)
    #[default]
    Compatible,
    /// Each secret peg consumed at most once
    Multiset,
}

impl ScoringRule {
    /// Score `guess` against `secret`
    ///
    /// Both codes are expected to have the same length; extra positions in
    /// the longer one are ignored.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Score, ScoringRule};
    ///
    /// let secret = Code::parse("GRBY");
    /// let score = ScoringRule::Compatible.score(&Code::parse("YBRG"), &secret);
    /// assert_eq!(score, Score::new(0, 4));
    /// ```
    #[must_use]
    pub fn score(self, guess: &Code, secret: &Code) -> Score {
        match self {
            Self::Compatible => score_compatible(guess, secret),
            Self::Multiset => score_multiset(guess, secret),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compatible => "compatible",
            Self::Multiset => "multiset",
        }
    }
}

impl FromStr for ScoringRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compatible" | "compat" | "legacy" => Ok(Self::Compatible),
            "multiset" | "standard" => Ok(Self::Multiset),
            _ => Err(ConfigError::UnknownScoringRule(s.to_string())),
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn score_compatible(guess: &Code, secret: &Code) -> Score {
    let mut score = Score::default();

    for (&guessed, &hidden) in guess.colors().iter().zip(secret.colors()) {
        if guessed == hidden {
            score.red += 1;
        } else if secret.contains(guessed) {
            score.white += 1;
        }
    }

    score
}

fn score_multiset(guess: &Code, secret: &Code) -> Score {
    let mut score = Score::default();
    let mut available: FxHashMap<_, u8> = FxHashMap::default();
    let mut unmatched = Vec::new();

    // First pass: exact matches; everything else stays in play
    for (&guessed, &hidden) in guess.colors().iter().zip(secret.colors()) {
        if guessed == hidden {
            score.red += 1;
        } else {
            *available.entry(hidden).or_insert(0) += 1;
            unmatched.push(guessed);
        }
    }

    // Second pass: consume remaining secret pegs
    for guessed in unmatched {
        if let Some(count) = available.get_mut(&guessed)
            && *count > 0
        {
            *count -= 1;
            score.white += 1;
        }
    }

    score
}
