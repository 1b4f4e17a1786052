//! Mastermind Solver - CLI
//!
//! Plays Mastermind against a hidden secret, benchmarks the solver, or
//! suggests guesses for a game played on a physical board.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use mastermind_solver::{
    commands::{
        BenchmarkConfig, PlayConfig, print_exhaustive_statistics, play_game, run_assist,
        run_benchmark, run_exhaustive, score_guess,
    },
    config::GameConfig,
    core::{Code, Palette, ScoringRule},
    output::{print_benchmark_result, print_play_result, print_score},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind feedback oracle and inference-driven solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Colour labels, one character each
    #[arg(short, long, global = true, default_value = Palette::CLASSIC)]
    palette: Palette,

    /// Number of positions in the secret
    #[arg(short, long, global = true, default_value_t = GameConfig::CLASSIC_LENGTH)]
    length: usize,

    /// Scoring rule: compatible (default) or multiset
    #[arg(short, long, global = true, default_value = "compatible")]
    scoring: ScoringRule,

    /// Give up after this many rounds (0 for no limit)
    #[arg(short, long, global = true, default_value = "64")]
    max_rounds: usize,

    /// Log solver decisions (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game against a random or chosen secret (default)
    Play {
        /// Play against this secret instead of a random one
        #[arg(long)]
        secret: Option<String>,

        /// Seed for the random secret
        #[arg(long)]
        seed: Option<u64>,

        /// Show the raw record and known colours after each round
        #[arg(short, long)]
        details: bool,
    },

    /// Score a guess against a secret
    Score {
        secret: String,
        guess: String,
    },

    /// Benchmark the solver on random secrets
    Benchmark {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "10000")]
        sessions: usize,

        /// Seed of the first session
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Expected mean rounds to check for drift
        #[arg(long)]
        baseline: Option<f64>,

        /// Allowed distance from the baseline mean
        #[arg(long, default_value = "0.1")]
        tolerance: f64,
    },

    /// Play every possible secret once
    Exhaustive,

    /// Suggest guesses for a game played elsewhere
    Assist,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let game = game_config(&cli)?;
    let command = cli.command.unwrap_or(Commands::Play {
        secret: None,
        seed: None,
        details: false,
    });

    match command {
        Commands::Play {
            secret,
            seed,
            details,
        } => run_play_command(game, secret.as_deref(), seed, details),
        Commands::Score { secret, guess } => run_score_command(&game, &secret, &guess),
        Commands::Benchmark {
            sessions,
            seed,
            baseline,
            tolerance,
        } => run_benchmark_command(game, sessions, seed, baseline, tolerance),
        Commands::Exhaustive => run_exhaustive_command(&game),
        Commands::Assist => run_assist(&game).context("assist session failed"),
    }
}

/// `warn` by default, `-v` for debug, `-vv` for trace; `RUST_LOG` wins
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn game_config(cli: &Cli) -> Result<GameConfig> {
    let max_rounds = (cli.max_rounds > 0).then_some(cli.max_rounds);

    Ok(GameConfig::new(cli.palette.clone(), cli.length)
        .context("invalid game configuration")?
        .with_scoring(cli.scoring)
        .with_max_rounds(max_rounds))
}

fn progress_bar(len: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .context("invalid progress template")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}

fn run_play_command(
    game: GameConfig,
    secret: Option<&str>,
    seed: Option<u64>,
    details: bool,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut config = PlayConfig::new(game, seed);
    config.secret = secret.map(Code::parse);

    let result = play_game(config).context("cannot start the game")?;
    print_play_result(&result, details);
    Ok(())
}

fn run_score_command(game: &GameConfig, secret: &str, guess: &str) -> Result<()> {
    let score = score_guess(game, secret, guess)
        .with_context(|| format!("cannot score {guess} against {secret}"))?;
    print_score(score, game.code_length());
    Ok(())
}

fn run_benchmark_command(
    game: GameConfig,
    sessions: usize,
    seed: u64,
    baseline: Option<f64>,
    tolerance: f64,
) -> Result<()> {
    println!("Running benchmark on {sessions} random secrets (seed {seed})...");

    let pb = progress_bar(sessions as u64)?;
    pb.set_message(format!("{} scoring", game.scoring()));

    let result = run_benchmark(&BenchmarkConfig::new(game, sessions, seed), &pb);
    pb.finish_and_clear();

    print_benchmark_result(&result, baseline.map(|mean| (mean, tolerance)));
    Ok(())
}

fn run_exhaustive_command(game: &GameConfig) -> Result<()> {
    let classic = game.palette() == &Palette::classic()
        && game.code_length() == GameConfig::CLASSIC_LENGTH
        && game.scoring() == ScoringRule::default();

    println!("\n{}", "═".repeat(70));
    println!(" Exhaustive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nPalette {}, {} positions, {} scoring\n",
        game.palette(),
        game.code_length(),
        game.scoring()
    );

    let pb = progress_bar(0)?;
    pb.set_message("solving");
    let stats = run_exhaustive(game, &pb);
    pb.finish_and_clear();

    print_exhaustive_statistics(&stats, classic);
    Ok(())
}
