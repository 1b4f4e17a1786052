//! Knowledge derived from the history
//!
//! Two scored guesses that differ in which colours they use tell us
//! something: any change in the total peg count must come from the colours
//! one guess has and the other lacks. Each comparison with differing totals
//! yields a pair of `ConstraintFact`s, one per side.
//!
//! A fact resolves to a definite answer only when its side has exactly one
//! colour and the amount is ±1: `+1` proves the colour is in the secret,
//! `-1` proves it is absent. Wider facts are kept but not exploited.

use crate::config::GameConfig;
use crate::core::{Color, Palette};
use crate::oracle::HistoryRecord;
use rustc_hash::FxHashSet;

/// Colours on one side of a comparison and how much they moved the total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintFact {
    /// Colours in this side's guess but not the other's, in guess order
    pub options: Vec<Color>,
    /// Total score of this side minus total score of the other side
    pub amount: i32,
}

impl ConstraintFact {
    /// The single colour this fact proves present, if any
    #[must_use]
    pub fn proves_present(&self) -> Option<Color> {
        match self.options.as_slice() {
            [color] if self.amount == 1 => Some(*color),
            _ => None,
        }
    }

    /// The single colour this fact proves absent, if any
    #[must_use]
    pub fn proves_absent(&self) -> Option<Color> {
        match self.options.as_slice() {
            [color] if self.amount == -1 => Some(*color),
            _ => None,
        }
    }
}

/// Colours known to be in or out of the secret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    pub certain_yes: FxHashSet<Color>,
    pub certain_no: FxHashSet<Color>,
}

impl Knowledge {
    /// Neither proven present nor proven absent
    #[must_use]
    pub fn is_open(&self, color: Color) -> bool {
        !self.certain_yes.contains(&color) && !self.certain_no.contains(&color)
    }

    /// Colours proven present, in palette order
    #[must_use]
    pub fn present_in(&self, palette: &Palette) -> Vec<Color> {
        in_palette_order(palette, &self.certain_yes)
    }

    /// Colours proven absent, in palette order
    #[must_use]
    pub fn absent_in(&self, palette: &Palette) -> Vec<Color> {
        in_palette_order(palette, &self.certain_no)
    }
}

fn in_palette_order(palette: &Palette, set: &FxHashSet<Color>) -> Vec<Color> {
    palette
        .colors()
        .iter()
        .copied()
        .filter(|c| set.contains(c))
        .collect()
}

/// Split two colour sequences into the colours unique to each side
///
/// Each side keeps the order of its own sequence.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::color_difference;
///
/// let a = Code::parse("GRBY");
/// let b = Code::parse("GRBO");
/// let (only_a, only_b) = color_difference(a.colors(), b.colors());
/// assert_eq!(Code::new(only_a).to_string(), "Y");
/// assert_eq!(Code::new(only_b).to_string(), "O");
/// ```
#[must_use]
pub fn color_difference(a: &[Color], b: &[Color]) -> (Vec<Color>, Vec<Color>) {
    let only_a = a.iter().filter(|c| !b.contains(c)).copied().collect();
    let only_b = b.iter().filter(|c| !a.contains(c)).copied().collect();
    (only_a, only_b)
}

/// Compare two scored guesses
///
/// Returns the facts for the first and second side, or `None` when both
/// guesses scored the same total.
#[must_use]
pub fn compare_records(
    first: &HistoryRecord,
    second: &HistoryRecord,
) -> Option<(ConstraintFact, ConstraintFact)> {
    let delta = i32::from(first.total()) - i32::from(second.total());
    if delta == 0 {
        return None;
    }

    let (only_first, only_second) = color_difference(first.guess.colors(), second.guess.colors());

    Some((
        ConstraintFact {
            options: only_first,
            amount: delta,
        },
        ConstraintFact {
            options: only_second,
            amount: -delta,
        },
    ))
}

/// Aggregate the history and accumulated facts into certain knowledge
///
/// If the latest guess found every colour of the secret (red + white equals
/// the code length), that guess's colours are the secret's colours and every
/// other colour is absent; this overrides the facts. Otherwise each
/// single-colour ±1 fact contributes its colour.
#[must_use]
pub fn derive_knowledge(
    config: &GameConfig,
    history: &[HistoryRecord],
    facts: &[ConstraintFact],
) -> Knowledge {
    if let Some(last) = history.last()
        && usize::from(last.total()) == config.code_length()
    {
        let certain_yes: FxHashSet<Color> = last.guess.colors().iter().copied().collect();
        let certain_no = config
            .palette()
            .colors()
            .iter()
            .copied()
            .filter(|c| !certain_yes.contains(c))
            .collect();
        return Knowledge {
            certain_yes,
            certain_no,
        };
    }

    let mut knowledge = Knowledge::default();
    for fact in facts {
        if let Some(color) = fact.proves_present() {
            knowledge.certain_yes.insert(color);
        } else if let Some(color) = fact.proves_absent() {
            knowledge.certain_no.insert(color);
        }
    }

    knowledge
}
