//! History records

use crate::core::{Code, Score};
use std::fmt;

/// One scored guess in a session's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub guess: Code,
    pub score: Score,
}

impl HistoryRecord {
    #[must_use]
    pub const fn new(guess: Code, score: Score) -> Self {
        Self { guess, score }
    }

    #[inline]
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.score.red
    }

    #[inline]
    #[must_use]
    pub const fn white(&self) -> u8 {
        self.score.white
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.score.total()
    }
}

/// Renders as `r=<red> w=<white> g=<guess>`
impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} g={}", self.score, self.guess)
    }
}
