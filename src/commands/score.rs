//! Score command
//!
//! Scores one guess against a chosen secret under the configured rule.

use crate::config::GameConfig;
use crate::core::{Code, Score};
use crate::error::GameError;
use crate::oracle::Oracle;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if the secret or the guess does not fit the
/// configuration, or if the secret repeats a colour.
pub fn score_guess(config: &GameConfig, secret: &str, guess: &str) -> Result<Score, GameError> {
    let mut oracle = Oracle::with_secret(
        config.clone(),
        StdRng::seed_from_u64(0),
        Code::parse(secret),
    )?;
    oracle.submit_guess(&Code::parse(guess))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, ScoringRule};

    #[test]
    fn scores_under_each_rule() {
        let compatible = GameConfig::classic();
        let multiset = GameConfig::classic().with_scoring(ScoringRule::Multiset);

        assert_eq!(score_guess(&compatible, "GRBY", "grbo"), Ok(Score::new(3, 0)));
        assert_eq!(score_guess(&compatible, "GRBY", "BBBB"), Ok(Score::new(1, 3)));
        assert_eq!(score_guess(&multiset, "GRBY", "BBBB"), Ok(Score::new(1, 0)));
    }

    #[test]
    fn reports_invalid_input() {
        let config = GameConfig::classic();

        assert_eq!(
            score_guess(&config, "GRBY", "GRBQ"),
            Err(GameError::InvalidColor(Color::new('Q')))
        );
        assert_eq!(
            score_guess(&config, "GRBB", "GRBY"),
            Err(GameError::DuplicateColor(Color::new('B')))
        );
        assert!(matches!(
            score_guess(&config, "GRBY", "GR"),
            Err(GameError::InvalidLength { found: 2, .. })
        ));
    }
}
