//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod exhaustive;
pub mod play;
pub mod score;

pub use assist::{AssistSession, run_assist};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use exhaustive::{ExhaustiveStatistics, print_exhaustive_statistics, run_exhaustive};
pub use play::{PlayConfig, PlayResult, RoundStep, play_game};
pub use score::score_guess;
