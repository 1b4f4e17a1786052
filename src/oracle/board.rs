//! The feedback oracle
//!
//! Holds the secret code and the append-only history of scored guesses.
//! The solver only ever sees the history.

use super::{CodeSource, HistoryRecord};
use crate::config::GameConfig;
use crate::core::{Code, Score};
use crate::error::GameError;
use rand::rngs::StdRng;

/// Scores guesses against a hidden secret
pub struct Oracle<S = StdRng> {
    config: GameConfig,
    source: S,
    secret: Code,
    history: Vec<HistoryRecord>,
}

impl<S: CodeSource> Oracle<S> {
    /// Start a session with a freshly drawn secret
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::oracle::Oracle;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let oracle = Oracle::new(GameConfig::classic(), StdRng::seed_from_u64(1));
    /// assert!(oracle.history().is_empty());
    /// ```
    pub fn new(config: GameConfig, mut source: S) -> Self {
        let secret = draw_secret(&config, &mut source);
        Self {
            config,
            source,
            secret,
            history: Vec::new(),
        }
    }

    /// Start a session with a caller-chosen secret
    ///
    /// The source is only used by later calls to `reset`.
    ///
    /// # Errors
    /// Returns `InvalidLength` or `InvalidColor` if the secret does not fit
    /// the configuration, and `DuplicateColor` if it repeats a colour.
    pub fn with_secret(config: GameConfig, source: S, secret: Code) -> Result<Self, GameError> {
        validate(&config, &secret)?;
        if let Some(color) = secret.first_repeat() {
            return Err(GameError::DuplicateColor(color));
        }

        Ok(Self {
            config,
            source,
            secret,
            history: Vec::new(),
        })
    }

    /// Draw a new secret and clear the history
    pub fn reset(&mut self) {
        self.secret = draw_secret(&self.config, &mut self.source);
        self.history.clear();
    }

    /// Score a guess and append it to the history
    ///
    /// # Errors
    /// Returns `InvalidLength` if the guess has the wrong number of colours
    /// and `InvalidColor` if it uses a colour outside the palette. Nothing is
    /// recorded when an error is returned.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::core::{Code, Score};
    /// use mastermind_solver::oracle::Oracle;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut oracle = Oracle::with_secret(
    ///     GameConfig::classic(),
    ///     StdRng::seed_from_u64(1),
    ///     Code::parse("GRBY"),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(oracle.submit_guess(&Code::parse("GRBO")).unwrap(), Score::new(3, 0));
    /// assert!(oracle.submit_guess(&Code::parse("GRB")).is_err());
    /// assert_eq!(oracle.history().len(), 1);
    /// ```
    pub fn submit_guess(&mut self, guess: &Code) -> Result<Score, GameError> {
        validate(&self.config, guess)?;

        let score = self.config.scoring().score(guess, &self.secret);
        self.history.push(HistoryRecord::new(guess.clone(), score));

        Ok(score)
    }

    /// All scored guesses, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of guesses made this session
    #[inline]
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    /// The hidden code
    ///
    /// The solver never calls this. Callers use it to show the answer once a
    /// game is over.
    #[inline]
    #[must_use]
    pub const fn reveal(&self) -> &Code {
        &self.secret
    }
}

fn draw_secret<S: CodeSource>(config: &GameConfig, source: &mut S) -> Code {
    Code::new(source.draw_distinct(config.palette().colors(), config.code_length()))
}

/// Length first, then palette membership
fn validate(config: &GameConfig, code: &Code) -> Result<(), GameError> {
    if code.len() != config.code_length() {
        return Err(GameError::InvalidLength {
            expected: config.code_length(),
            found: code.len(),
        });
    }

    if let Some(&color) = code
        .colors()
        .iter()
        .find(|&&c| !config.palette().contains(c))
    {
        return Err(GameError::InvalidColor(color));
    }

    Ok(())
}
