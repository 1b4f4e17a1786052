//! Core domain types for Mastermind
//!
//! Colours, codes and scores. Everything here is pure and free of game state.

mod code;
mod color;
mod score;

pub use code::Code;
pub use color::{Color, Palette};
pub use score::{Score, ScoringRule};
