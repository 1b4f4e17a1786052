//! Inference-driven codebreaker
//!
//! The solver never sees the secret. It reads the oracle's history,
//! accumulates constraint facts from consecutive guesses, and proposes the
//! first arrangement consistent with everything known so far.

use super::candidates::{candidate_pool, first_consistent};
use super::knowledge::{ConstraintFact, Knowledge, compare_records, derive_knowledge};
use crate::config::GameConfig;
use crate::core::Code;
use crate::error::GameError;
use crate::oracle::{CodeSource, HistoryRecord, Oracle};
use log::{debug, trace};

/// Automated player for one session at a time
pub struct Solver {
    config: GameConfig,
    facts: Vec<ConstraintFact>,
}

impl Solver {
    /// Create a solver for games played under `config`
    #[must_use]
    pub const fn new(config: GameConfig) -> Self {
        Self {
            config,
            facts: Vec::new(),
        }
    }

    /// Create a solver that plays by the oracle's rules
    #[must_use]
    pub fn for_oracle<S: CodeSource>(oracle: &Oracle<S>) -> Self {
        Self::new(oracle.config().clone())
    }

    /// Facts accumulated so far, oldest first
    #[inline]
    #[must_use]
    pub fn facts(&self) -> &[ConstraintFact] {
        &self.facts
    }

    /// Forget every fact, ready for a new session
    pub fn reset(&mut self) {
        self.facts.clear();
    }

    /// Colours currently proven present or absent
    #[must_use]
    pub fn knowledge(&self, history: &[HistoryRecord]) -> Knowledge {
        derive_knowledge(&self.config, history, &self.facts)
    }

    /// Propose the next guess for the given history
    ///
    /// # Errors
    /// Returns `GameError::Exhausted` if no arrangement of the candidate
    /// pool is consistent with the history.
    pub fn next_guess(&self, history: &[HistoryRecord]) -> Result<Code, GameError> {
        let knowledge = self.knowledge(history);
        let pool = candidate_pool(&self.config, &knowledge);

        let round = history.len();

        first_consistent(&pool, self.config.code_length(), history)
            .ok_or(GameError::Exhausted { round })
    }

    /// Compare the two most recent records and keep any facts they yield
    ///
    /// Does nothing until the history has at least two records.
    pub fn record_comparison(&mut self, history: &[HistoryRecord]) {
        let [.., first, second] = history else {
            return;
        };

        if let Some((a, b)) = compare_records(first, second) {
            trace!(
                "facts: {:?} {:+}, {:?} {:+}",
                a.options, a.amount, b.options, b.amount
            );
            self.facts.push(a);
            self.facts.push(b);
        }
    }

    /// Rebuild the facts from scratch for an edited history
    pub fn replay(&mut self, history: &[HistoryRecord]) {
        self.reset();
        for end in 2..=history.len() {
            self.record_comparison(&history[..end]);
        }
    }

    /// Play until the secret is found
    ///
    /// Returns the number of rounds taken.
    ///
    /// # Errors
    /// Returns `Exhausted` if the solver runs out of candidates and
    /// `RoundLimit` if the configured round limit is reached first. Errors
    /// from the oracle are passed through.
    pub fn solve<S: CodeSource>(&mut self, oracle: &mut Oracle<S>) -> Result<usize, GameError> {
        self.solve_with(oracle, |_, _| {})
    }

    /// Play until the secret is found, reporting after every round
    ///
    /// `on_round` receives the history so far and the knowledge derived
    /// from it.
    ///
    /// # Errors
    /// Same as [`Solver::solve`].
    pub fn solve_with<S, F>(
        &mut self,
        oracle: &mut Oracle<S>,
        mut on_round: F,
    ) -> Result<usize, GameError>
    where
        S: CodeSource,
        F: FnMut(&[HistoryRecord], &Knowledge),
    {
        let code_length = self.config.code_length();

        loop {
            if let Some(limit) = self.config.max_rounds()
                && oracle.rounds() >= limit
            {
                return Err(GameError::RoundLimit { limit });
            }

            let guess = self.next_guess(oracle.history())?;
            let score = oracle.submit_guess(&guess)?;
            debug!("round {}: {guess} -> {score}", oracle.rounds());

            self.record_comparison(oracle.history());
            let knowledge = self.knowledge(oracle.history());
            trace!(
                "knowledge: yes={:?} no={:?}",
                knowledge.certain_yes, knowledge.certain_no
            );

            on_round(oracle.history(), &knowledge);

            if score.is_solved(code_length) {
                return Ok(oracle.rounds());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Palette, Score, ScoringRule};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn oracle_with(config: GameConfig, secret: &str) -> Oracle {
        Oracle::with_secret(config, StdRng::seed_from_u64(0), Code::parse(secret)).unwrap()
    }

    fn transcript(oracle: &Oracle) -> Vec<String> {
        oracle.history().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn solves_grby_in_four() {
        let mut oracle = oracle_with(GameConfig::classic(), "GRBY");
        let mut solver = Solver::for_oracle(&oracle);

        assert_eq!(solver.solve(&mut oracle), Ok(4));
        assert_eq!(
            transcript(&oracle),
            vec![
                "r=2 w=1 g=GRYO",
                "r=2 w=1 g=GRYP",
                "r=2 w=2 g=GRYB",
                "r=4 w=0 g=GRBY",
            ]
        );
    }

    #[test]
    fn first_guess_wins_when_lucky() {
        let mut oracle = oracle_with(GameConfig::classic(), "GRYO");
        let mut solver = Solver::for_oracle(&oracle);
        assert_eq!(solver.solve(&mut oracle), Ok(1));
    }

    #[test]
    fn solves_ybrg_once_every_colour_is_found() {
        let mut oracle = oracle_with(GameConfig::classic(), "YBRG");
        let mut solver = Solver::for_oracle(&oracle);

        let mut shortcut_seen = false;
        let rounds = solver
            .solve_with(&mut oracle, |history, knowledge| {
                if history.last().is_some_and(|r| r.total() == 4) {
                    shortcut_seen = true;
                    assert_eq!(knowledge.certain_yes.len(), 4);
                    assert_eq!(knowledge.certain_no.len(), 2);
                }
            })
            .unwrap();

        assert_eq!(rounds, 10);
        assert!(shortcut_seen);
        assert_eq!(oracle.history().last().unwrap().guess, Code::parse("YBRG"));
    }

    #[test]
    fn records_facts_from_consecutive_guesses() {
        let history = [
            HistoryRecord::new(Code::parse("GRYP"), Score::new(2, 1)),
            HistoryRecord::new(Code::parse("GRYB"), Score::new(2, 2)),
        ];
        let mut solver = Solver::new(GameConfig::classic());

        solver.record_comparison(&history[..1]);
        assert!(solver.facts().is_empty());

        solver.record_comparison(&history);
        assert_eq!(solver.facts().len(), 2);
        assert_eq!(solver.facts()[0].amount, -1);
        assert_eq!(solver.facts()[1].amount, 1);

        solver.reset();
        assert!(solver.facts().is_empty());
    }

    #[test]
    fn replay_matches_incremental_recording() {
        let mut oracle = oracle_with(GameConfig::classic(), "OPBY");
        let mut played = Solver::for_oracle(&oracle);
        played.solve(&mut oracle).unwrap();

        let mut replayed = Solver::new(GameConfig::classic());
        replayed.replay(oracle.history());
        assert_eq!(replayed.facts(), played.facts());

        // Dropping the last round drops only what it contributed
        let shorter = &oracle.history()[..oracle.rounds() - 1];
        replayed.replay(shorter);
        assert!(replayed.facts().len() <= played.facts().len());
        assert_eq!(
            replayed.next_guess(shorter).unwrap(),
            oracle.history().last().unwrap().guess
        );
    }

    #[test]
    fn next_guess_never_repeats_history() {
        let solver = Solver::new(GameConfig::classic());
        let history = [HistoryRecord::new(Code::parse("GRYO"), Score::new(1, 1))];
        let guess = solver.next_guess(&history).unwrap();
        assert_ne!(guess, Code::parse("GRYO"));
        assert_eq!(guess.first_repeat(), None);
    }

    #[test]
    fn contradictory_history_is_exhausted() {
        // Claims every colour is in the secret and none is placed
        let solver = Solver::new(GameConfig::new(Palette::new("ABC").unwrap(), 3).unwrap());
        let history: Vec<HistoryRecord> = ["ABC", "BCA", "CAB"]
            .iter()
            .map(|g| HistoryRecord::new(Code::parse(g), Score::new(0, 3)))
            .collect();

        assert_eq!(
            solver.next_guess(&history),
            Err(GameError::Exhausted { round: 3 })
        );
    }

    #[test]
    fn round_limit_stops_a_long_game() {
        // PRBO is the slowest secret of the classic game
        let config = GameConfig::classic().with_max_rounds(Some(10));
        let mut oracle = oracle_with(config, "PRBO");
        let mut solver = Solver::for_oracle(&oracle);

        assert_eq!(
            solver.solve(&mut oracle),
            Err(GameError::RoundLimit { limit: 10 })
        );
        assert_eq!(oracle.rounds(), 10);

        let config = GameConfig::classic().with_max_rounds(Some(20));
        let mut oracle = oracle_with(config, "PRBO");
        let mut solver = Solver::for_oracle(&oracle);
        assert_eq!(solver.solve(&mut oracle), Ok(20));
    }

    #[test]
    fn knowledge_is_sound_for_every_secret() {
        let config = GameConfig::classic();

        for secret in config.palette().colors().iter().copied().permutations(4) {
            let secret = Code::new(secret);
            let mut oracle = Oracle::with_secret(
                config.clone(),
                StdRng::seed_from_u64(0),
                secret.clone(),
            )
            .unwrap();
            let mut solver = Solver::for_oracle(&oracle);

            solver
                .solve_with(&mut oracle, |_, knowledge| {
                    for &color in &knowledge.certain_yes {
                        assert!(secret.contains(color), "{color} wrongly placed in {secret}");
                    }
                    for &color in &knowledge.certain_no {
                        assert!(!secret.contains(color), "{color} wrongly ruled out of {secret}");
                    }
                })
                .unwrap();

            assert_eq!(oracle.history().last().unwrap().guess, secret);
        }
    }

    #[test]
    fn random_sessions_terminate() {
        let mut oracle = Oracle::new(GameConfig::classic(), StdRng::seed_from_u64(11));
        let mut solver = Solver::for_oracle(&oracle);

        for _ in 0..300 {
            oracle.reset();
            solver.reset();
            let rounds = solver.solve(&mut oracle).unwrap();
            assert!((1..=20).contains(&rounds));
            assert_eq!(&oracle.history().last().unwrap().guess, oracle.reveal());
        }
    }

    #[test]
    fn rounds_do_not_depend_on_scoring_rule() {
        for secret in ["GRBY", "PRBO", "OPBY", "BGRY"] {
            let mut compatible = oracle_with(GameConfig::classic(), secret);
            let mut multiset = oracle_with(
                GameConfig::classic().with_scoring(ScoringRule::Multiset),
                secret,
            );

            let a = Solver::for_oracle(&compatible).solve(&mut compatible);
            let b = Solver::for_oracle(&multiset).solve(&mut multiset);
            assert_eq!(a, b);
            assert_eq!(transcript(&compatible), transcript(&multiset));
        }
    }

    #[test]
    fn other_game_sizes_are_solved() {
        let config = GameConfig::new(Palette::new("ABCDE").unwrap(), 3).unwrap();
        let mut total = 0;

        for secret in config.palette().colors().iter().copied().permutations(3) {
            let mut oracle =
                Oracle::with_secret(config.clone(), StdRng::seed_from_u64(0), Code::new(secret))
                    .unwrap();
            let rounds = Solver::for_oracle(&oracle).solve(&mut oracle).unwrap();
            assert!(rounds <= 9);
            total += rounds;
        }

        assert_eq!(total, 279);
    }
}
