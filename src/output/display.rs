//! Display functions for command results

use super::formatters::{color_list, distribution_bar, score_to_pegs};
use crate::commands::{BenchmarkResult, PlayResult};
use crate::core::Score;
use colored::Colorize;

/// Print the result of a single game
///
/// Verbose output adds the raw `r= w= g=` record and the knowledge held
/// after every round.
pub fn print_play_result(result: &PlayResult, verbose: bool) {
    let code_length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            step.record.guess,
            score_to_pegs(step.record.score, code_length)
        );

        if verbose {
            println!("  {}", step.record.to_string().bright_black());
            println!("  Present: {}", color_list(&step.certain_yes).green());
            println!("  Absent:  {}", color_list(&step.certain_no).red());
        }
    }

    println!();
    match &result.outcome {
        Ok(rounds) => println!(
            "{}",
            format!("✅ Solved in {rounds} rounds!").green().bold()
        ),
        Err(err) => println!("{}", format!("❌ {err}").red().bold()),
    }
}

/// Print the score of one guess
pub fn print_score(score: Score, code_length: usize) {
    println!(
        "{} {}",
        score_to_pegs(score, code_length),
        score.to_string().bright_yellow()
    );
}

/// Print the result of a benchmark
///
/// With a `(baseline, tolerance)` pair the mean is compared against it.
pub fn print_benchmark_result(result: &BenchmarkResult, baseline: Option<(f64, f64)>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Sessions:         {}", result.sessions);
    println!("   Solved:           {}", result.solved.to_string().green());
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Sessions/second:  {:.1}", result.sessions_per_second);

    if let Some((baseline, tolerance)) = baseline {
        let drift = result.drift_from(baseline);
        let verdict = if result.within(baseline, tolerance) {
            "ok".green().bold()
        } else {
            "DRIFT".red().bold()
        };
        println!("\n📐 {}", "Baseline:".bright_cyan().bold());
        println!("   Expected mean:    {baseline:.3} ± {tolerance}");
        println!("   Drift:            {drift:+.3} {verdict}");
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for rounds in result.min_rounds..=result.max_rounds {
        if let Some(&count) = result.distribution.get(&rounds) {
            let pct = (count as f64 / result.solved.max(1) as f64) * 100.0;
            println!(
                "   {rounds:2}: {} {count:6} ({pct:5.1}%)",
                distribution_bar(count, max_count, 40).green()
            );
        }
    }
}
