//! Exhaustive evaluation
//!
//! Plays every possible secret once. The solver is deterministic, so for a
//! given configuration the totals are exact and serve as a regression
//! baseline.

use crate::config::GameConfig;
use crate::core::Code;
use crate::error::GameError;
use crate::oracle::Oracle;
use crate::output::formatters::distribution_bar;
use crate::solver::Solver;
use colored::Colorize;
use indicatif::ProgressBar;
use itertools::Itertools;
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Number of secrets in the classic game (6 × 5 × 4 × 3)
pub const CLASSIC_SECRETS: usize = 360;

/// Rounds needed to solve every classic secret once, compatible scoring
pub const CLASSIC_TOTAL_ROUNDS: usize = 3211;

/// Rounds needed for the slowest classic secret
pub const CLASSIC_WORST_ROUNDS: usize = 20;

/// Mean rounds per classic game
pub const CLASSIC_BASELINE_MEAN: f64 = CLASSIC_TOTAL_ROUNDS as f64 / CLASSIC_SECRETS as f64;

/// Statistics from playing every secret
#[derive(Debug)]
pub struct ExhaustiveStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: FxHashMap<usize, usize>,
    /// Slowest secrets, most rounds first
    pub hardest: Vec<(Code, usize)>,
    pub failures: Vec<(Code, GameError)>,
    pub total_time: Duration,
}

impl ExhaustiveStatistics {
    /// Whether the totals equal the recorded classic-game baseline
    #[must_use]
    pub fn matches_classic_baseline(&self) -> bool {
        self.failed == 0
            && self.total_secrets == CLASSIC_SECRETS
            && self.total_rounds == CLASSIC_TOTAL_ROUNDS
            && self.max_rounds == CLASSIC_WORST_ROUNDS
    }
}

/// Every secret the configuration allows, in palette order
#[must_use]
pub fn all_secrets(game: &GameConfig) -> Vec<Code> {
    game.palette()
        .colors()
        .iter()
        .copied()
        .permutations(game.code_length())
        .map(Code::new)
        .collect()
}

/// Play every secret once, in parallel
pub fn run_exhaustive(game: &GameConfig, progress: &ProgressBar) -> ExhaustiveStatistics {
    let secrets = all_secrets(game);
    progress.set_length(secrets.len() as u64);
    let start = Instant::now();

    let outcomes: Vec<(Code, Result<usize, GameError>)> = secrets
        .into_par_iter()
        .map(|secret| {
            let outcome =
                Oracle::with_secret(game.clone(), StdRng::seed_from_u64(0), secret.clone())
                    .and_then(|mut oracle| Solver::for_oracle(&oracle).solve(&mut oracle));
            progress.inc(1);
            (secret, outcome)
        })
        .collect();

    let total_time = start.elapsed();
    let total_secrets = outcomes.len();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut solved_rounds = Vec::with_capacity(total_secrets);
    let mut failures = Vec::new();

    for (secret, outcome) in outcomes {
        match outcome {
            Ok(rounds) => {
                *distribution.entry(rounds).or_insert(0) += 1;
                solved_rounds.push((secret, rounds));
            }
            Err(err) => {
                warn!("secret {secret} not solved: {err}");
                failures.push((secret, err));
            }
        }
    }

    let solved = solved_rounds.len();
    let total_rounds: usize = solved_rounds.iter().map(|(_, r)| r).sum();
    let average_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };
    let min_rounds = solved_rounds.iter().map(|(_, r)| *r).min().unwrap_or(0);
    let max_rounds = solved_rounds.iter().map(|(_, r)| *r).max().unwrap_or(0);

    let mut hardest = solved_rounds;
    hardest.sort_by_key(|(_, rounds)| std::cmp::Reverse(*rounds));
    hardest.truncate(10);

    ExhaustiveStatistics {
        total_secrets,
        solved,
        failed: failures.len(),
        total_rounds,
        average_rounds,
        min_rounds,
        max_rounds,
        distribution,
        hardest,
        failures,
        total_time,
    }
}

/// Print exhaustive statistics
pub fn print_exhaustive_statistics(stats: &ExhaustiveStatistics, classic: bool) {
    println!("\n{}", "═".repeat(70));
    println!(" Exhaustive Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Secrets tested:      {}", stats.total_secrets);
    println!("  Solved:              {}", stats.solved.to_string().green());
    if stats.failed > 0 {
        println!("  Failed:              {}", stats.failed.to_string().red());
    }
    println!(
        "  Average rounds:      {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_rounds, stats.max_rounds
    );
    println!("  Total rounds:        {}", stats.total_rounds);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Round Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(1);
    for rounds in stats.min_rounds..=stats.max_rounds {
        let count = stats.distribution.get(&rounds).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        println!(
            "  {rounds:2} rounds: {} {count:4} ({percentage:5.1}%)",
            distribution_bar(count, max_count, 40)
        );
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, rounds) in stats.hardest.iter().take(5) {
            println!("  {} ({rounds} rounds)", secret.to_string().yellow());
        }
    }

    for (secret, err) in &stats.failures {
        println!("  {} {}", secret.to_string().red(), err);
    }

    if classic {
        println!("\n📐 {}", "Baseline".bright_cyan().bold());
        println!(
            "  Recorded:            {CLASSIC_TOTAL_ROUNDS} rounds over {CLASSIC_SECRETS} secrets ({CLASSIC_BASELINE_MEAN:.3} mean, worst {CLASSIC_WORST_ROUNDS})"
        );
        if stats.matches_classic_baseline() {
            println!("  Status:              {}", "no drift".bright_green().bold());
        } else {
            println!("  Status:              {}", "DRIFT DETECTED".red().bold());
        }
    }
}
