//! Errors raised by the oracle and the solver

use crate::core::Color;
use thiserror::Error;

/// Failure of a game operation
///
/// Every variant is raised before any history or constraint is mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("code must be exactly {expected} colours long, got {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("{0} is not a colour in this game")]
    InvalidColor(Color),

    #[error("secret repeats colour {0}")]
    DuplicateColor(Color),

    #[error("no candidate guess is consistent with the history after {round} rounds")]
    Exhausted { round: usize },

    #[error("secret not found within {limit} rounds")]
    RoundLimit { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            GameError::InvalidLength {
                expected: 4,
                found: 3
            }
            .to_string(),
            "code must be exactly 4 colours long, got 3"
        );
        assert_eq!(
            GameError::InvalidColor(Color::new('x')).to_string(),
            "X is not a colour in this game"
        );
        assert_eq!(
            GameError::RoundLimit { limit: 10 }.to_string(),
            "secret not found within 10 rounds"
        );
    }
}
