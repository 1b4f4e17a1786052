//! Inference engine
//!
//! Knowledge derivation, candidate generation and the game loop.

pub mod candidates;
mod engine;
pub mod knowledge;

pub use engine::Solver;
pub use knowledge::{ConstraintFact, Knowledge, color_difference, compare_records, derive_knowledge};
