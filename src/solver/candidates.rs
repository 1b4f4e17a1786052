//! Candidate guess generation
//!
//! Builds an ordered pool of colours from the current knowledge, enumerates
//! arrangements of the pool without repetition, and returns the first one
//! the history does not rule out. Enumeration follows palette order, so the
//! same history always produces the same guess.

use super::knowledge::Knowledge;
use crate::config::GameConfig;
use crate::core::{Code, Color};
use crate::oracle::HistoryRecord;
use itertools::Itertools;

/// Ordered colours to draw the next guess from
///
/// When every spare colour has been proven absent, the pool is the rest of
/// the palette. Otherwise it starts with the colours proven present. Either
/// way the open colours follow, so every colour not proven absent appears
/// exactly once.
#[must_use]
pub fn candidate_pool(config: &GameConfig, knowledge: &Knowledge) -> Vec<Color> {
    let palette = config.palette().colors();

    let mut pool: Vec<Color> = if knowledge.certain_no.len() == config.spare_colors() {
        palette
            .iter()
            .copied()
            .filter(|c| !knowledge.certain_no.contains(c))
            .collect()
    } else {
        palette
            .iter()
            .copied()
            .filter(|c| knowledge.certain_yes.contains(c))
            .collect()
    };

    for &color in palette {
        if knowledge.is_open(color) && !pool.contains(&color) {
            pool.push(color);
        }
    }

    pool
}

/// Check a candidate against every prior guess
///
/// A candidate is rejected if it repeats a prior guess, or if it shares a
/// colour at the same position with a prior guess that scored no red pegs.
#[must_use]
pub fn is_consistent(candidate: &[Color], history: &[HistoryRecord]) -> bool {
    history.iter().all(|record| {
        let prior = record.guess.colors();
        if prior == candidate {
            return false;
        }
        record.red() > 0 || prior.iter().zip(candidate).all(|(a, b)| a != b)
    })
}

/// First arrangement of `code_length` pool colours that passes the filter
#[must_use]
pub fn first_consistent(
    pool: &[Color],
    code_length: usize,
    history: &[HistoryRecord],
) -> Option<Code> {
    pool.iter()
        .copied()
        .permutations(code_length)
        .find(|candidate| is_consistent(candidate, history))
        .map(Code::new)
}
