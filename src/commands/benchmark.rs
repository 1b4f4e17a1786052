//! Benchmark command
//!
//! Plays many independent sessions in parallel and aggregates round counts.
//! Session `i` draws its secret from a generator seeded with `seed + i`, so
//! a run is reproducible regardless of how rayon schedules the work.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::oracle::Oracle;
use crate::solver::Solver;
use indicatif::ProgressBar;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub game: GameConfig,
    pub sessions: usize,
    pub seed: u64,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(game: GameConfig, sessions: usize, seed: u64) -> Self {
        Self {
            game,
            sessions,
            seed,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub sessions: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: FxHashMap<usize, usize>,
    /// Seed and error of every failed session
    pub failures: Vec<(u64, GameError)>,
    pub duration: Duration,
    pub sessions_per_second: f64,
}

impl BenchmarkResult {
    /// Signed distance of the mean round count from `baseline`
    #[must_use]
    pub fn drift_from(&self, baseline: f64) -> f64 {
        self.average_rounds - baseline
    }

    /// Whether the mean lies within `tolerance` of `baseline`
    #[must_use]
    pub fn within(&self, baseline: f64, tolerance: f64) -> bool {
        self.drift_from(baseline).abs() <= tolerance
    }
}

/// Play one session with its own seeded generator
///
/// # Errors
///
/// Passes through the solver's error if the session is not solved.
pub fn run_session(game: &GameConfig, seed: u64) -> Result<usize, GameError> {
    let mut oracle = Oracle::new(game.clone(), StdRng::seed_from_u64(seed));
    Solver::for_oracle(&oracle).solve(&mut oracle)
}

/// Run `config.sessions` sessions in parallel
///
/// `progress` is advanced once per finished session; pass
/// `ProgressBar::hidden()` for silent runs.
pub fn run_benchmark(config: &BenchmarkConfig, progress: &ProgressBar) -> BenchmarkResult {
    info!(
        "benchmark: {} sessions, seed {}, {} scoring",
        config.sessions,
        config.seed,
        config.game.scoring()
    );
    let start = Instant::now();

    let outcomes: Vec<(u64, Result<usize, GameError>)> = (0..config.sessions)
        .into_par_iter()
        .map(|i| {
            let seed = config.seed.wrapping_add(i as u64);
            let outcome = run_session(&config.game, seed);
            progress.inc(1);
            (seed, outcome)
        })
        .collect();

    let duration = start.elapsed();

    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for (seed, outcome) in outcomes {
        match outcome {
            Ok(rounds) => {
                total_rounds += rounds;
                min_rounds = min_rounds.min(rounds);
                max_rounds = max_rounds.max(rounds);
                *distribution.entry(rounds).or_insert(0) += 1;
            }
            Err(err) => {
                warn!("session with seed {seed} failed: {err}");
                failures.push((seed, err));
            }
        }
    }

    let failed = failures.len();
    let solved = config.sessions - failed;
    let average_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };

    info!(
        "benchmark: {solved} solved, {failed} failed, mean {average_rounds:.3} rounds in {:.2}s",
        duration.as_secs_f64()
    );

    BenchmarkResult {
        sessions: config.sessions,
        solved,
        failed,
        total_rounds,
        average_rounds,
        min_rounds: if solved > 0 { min_rounds } else { 0 },
        max_rounds,
        distribution,
        failures,
        duration,
        sessions_per_second: config.sessions as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
