//! Single game command
//!
//! Plays one game against a random or chosen secret and records every round.

use crate::config::GameConfig;
use crate::core::{Code, Color, Palette};
use crate::error::GameError;
use crate::oracle::{HistoryRecord, Oracle};
use crate::solver::{Knowledge, Solver};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a single game
pub struct PlayConfig {
    pub game: GameConfig,
    /// Play against this secret instead of drawing one
    pub secret: Option<Code>,
    /// Seed for the secret draw
    pub seed: u64,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(game: GameConfig, seed: u64) -> Self {
        Self {
            game,
            secret: None,
            seed,
        }
    }
}

/// A single round of the game with the knowledge held after it
pub struct RoundStep {
    pub record: HistoryRecord,
    /// Proven present, in palette order
    pub certain_yes: Vec<Color>,
    /// Proven absent, in palette order
    pub certain_no: Vec<Color>,
}

/// Result of playing a game
pub struct PlayResult {
    pub secret: Code,
    pub steps: Vec<RoundStep>,
    /// Rounds taken, or why the solver stopped
    pub outcome: Result<usize, GameError>,
}

impl PlayResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Play one game
///
/// Solver failures (exhaustion, round limit) are reported in the result's
/// `outcome` rather than as an error.
///
/// # Errors
///
/// Returns an error if a chosen secret does not fit the configuration.
pub fn play_game(config: PlayConfig) -> Result<PlayResult, GameError> {
    let source = StdRng::seed_from_u64(config.seed);
    let mut oracle = match config.secret {
        Some(secret) => Oracle::with_secret(config.game, source, secret)?,
        None => Oracle::new(config.game, source),
    };
    let palette = oracle.config().palette().clone();
    let mut solver = Solver::for_oracle(&oracle);
    let mut steps = Vec::new();

    let outcome = solver.solve_with(&mut oracle, |history, knowledge| {
        if let Some(record) = history.last() {
            steps.push(step(&palette, record, knowledge));
        }
    });

    Ok(PlayResult {
        secret: oracle.reveal().clone(),
        steps,
        outcome,
    })
}

fn step(palette: &Palette, record: &HistoryRecord, knowledge: &Knowledge) -> RoundStep {
    RoundStep {
        record: record.clone(),
        certain_yes: knowledge.present_in(palette),
        certain_no: knowledge.absent_in(palette),
    }
}
