//! Assisted play
//!
//! The solver suggests guesses for a game played elsewhere. The user types
//! the score each suggestion earned as `<red> <white>`.

use crate::config::GameConfig;
use crate::core::{Code, Score};
use crate::error::GameError;
use crate::oracle::HistoryRecord;
use crate::output::formatters::{color_list, score_to_pegs};
use crate::solver::{Knowledge, Solver};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Feedback(Score),
    Undo,
    New,
    Quit,
}

/// Parse a line of input; `win` is shorthand for an all-red score
#[must_use]
pub fn parse_command(input: &str, code_length: usize) -> Option<Command> {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(Command::Quit),
        "new" | "n" => Some(Command::New),
        "undo" | "u" => Some(Command::Undo),
        "win" | "correct" | "solved" => u8::try_from(code_length)
            .ok()
            .map(|red| Command::Feedback(Score::new(red, 0))),
        other => parse_feedback(other, code_length).map(Command::Feedback),
    }
}

/// Parse `<red> <white>` (space, comma or slash separated)
///
/// Rejects scores no secret can produce for a guess without repeats: more
/// pegs than positions, or every position but one red and the last white.
#[must_use]
pub fn parse_feedback(input: &str, code_length: usize) -> Option<Score> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
        .filter(|part| !part.is_empty());

    let red: u8 = parts.next()?.parse().ok()?;
    let white: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let red_pegs = usize::from(red);
    if red_pegs + usize::from(white) > code_length {
        return None;
    }
    if red_pegs + 1 == code_length && white == 1 {
        return None;
    }

    Some(Score::new(red, white))
}

/// Guesses and scores of the game being assisted
pub struct AssistSession {
    config: GameConfig,
    solver: Solver,
    history: Vec<HistoryRecord>,
}

impl AssistSession {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            solver: Solver::new(config.clone()),
            config,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// The guess to play next
    ///
    /// # Errors
    /// Returns `GameError::Exhausted` when the scores entered so far
    /// contradict each other.
    pub fn suggest(&self) -> Result<Code, GameError> {
        self.solver.next_guess(&self.history)
    }

    #[must_use]
    pub fn knowledge(&self) -> Knowledge {
        self.solver.knowledge(&self.history)
    }

    /// Record the score `guess` earned
    pub fn record(&mut self, guess: Code, score: Score) {
        self.history.push(HistoryRecord::new(guess, score));
        self.solver.record_comparison(&self.history);
    }

    /// Drop the last round; returns false if there was none
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }
        self.solver.replay(&self.history);
        true
    }

    pub fn new_game(&mut self) {
        self.history.clear();
        self.solver.reset();
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|record| record.score.is_solved(self.config.code_length()))
    }
}

/// Run assisted play on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    assist_loop(config, &mut stdin.lock(), &mut stdout.lock())
}

/// Assisted play over any reader and writer; end of input quits
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn assist_loop<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let code_length = config.code_length();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, " {} ", "MASTERMIND ASSIST".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\nPalette {}, {code_length} positions, {} scoring.",
        config.palette(),
        config.scoring()
    )?;
    writeln!(
        out,
        "After each guess enter the score as '<red> <white>', or 'win'."
    )?;
    writeln!(out, "Commands: 'undo', 'new', 'quit'\n")?;

    let mut session = AssistSession::new(config.clone());

    loop {
        let suggestion = match session.suggest() {
            Ok(guess) => {
                let knowledge = session.knowledge();
                writeln!(out, "{}", "─".repeat(60))?;
                writeln!(
                    out,
                    "Round {}: play {}",
                    session.history().len() + 1,
                    guess.to_string().bright_yellow().bold()
                )?;
                writeln!(
                    out,
                    "  present: {}   absent: {}",
                    color_list(&knowledge.present_in(config.palette())),
                    color_list(&knowledge.absent_in(config.palette()))
                )?;
                Some(guess)
            }
            Err(err) => {
                writeln!(out, "\n❌ {err}")?;
                writeln!(out, "The scores entered may be wrong. Type 'undo' or 'new'.\n")?;
                None
            }
        };

        let Some(line) = prompt(input, out, "Score")? else {
            return Ok(());
        };

        match parse_command(&line, code_length) {
            Some(Command::Quit) => {
                writeln!(out, "\n👋 Bye!\n")?;
                return Ok(());
            }
            Some(Command::New) => {
                session.new_game();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Some(Command::Undo) => {
                if session.undo() {
                    writeln!(out, "✓ Undone! Back to round {}\n", session.history().len() + 1)?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            Some(Command::Feedback(score)) => {
                let Some(guess) = suggestion else {
                    writeln!(out, "No guess to score. Type 'undo' or 'new'.\n")?;
                    continue;
                };
                session.record(guess, score);

                if session.is_solved() {
                    print_solved(&session, code_length, out)?;

                    let again = prompt(input, out, "Play again? (yes/no)")?;
                    if matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
                        session.new_game();
                        writeln!(out, "\n🔄 New game started!\n")?;
                    } else {
                        writeln!(out, "\n👋 Bye!\n")?;
                        return Ok(());
                    }
                }
            }
            None => {
                writeln!(
                    out,
                    "❌ Expected '<red> <white>' with at most {code_length} pegs, or a command\n"
                )?;
            }
        }
    }
}

fn print_solved<W: Write>(session: &AssistSession, code_length: usize, out: &mut W) -> Result<()> {
    let rounds = session.history().len();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "  {} in {} {}",
        "🎉 Solved".bright_green().bold(),
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "round" } else { "rounds" }
    )?;
    for (i, record) in session.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.guess.to_string().bright_white().bold(),
            score_to_pegs(record.score, code_length)
        )?;
    }
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;

    Ok(())
}

/// Prompt for one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush().context("failed to flush output")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;

    Ok((read > 0).then(|| line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;
    use std::io::Cursor;
    use test_case::test_case;

    #[test_case("2 1", Some(Score::new(2, 1)) ; "space separated")]
    #[test_case("0,4", Some(Score::new(0, 4)) ; "comma separated")]
    #[test_case(" 1 / 2 ", Some(Score::new(1, 2)) ; "slash separated")]
    #[test_case("4 0", Some(Score::new(4, 0)) ; "solved")]
    #[test_case("0 0", Some(Score::new(0, 0)) ; "blank")]
    #[test_case("3 2", None ; "too many pegs")]
    #[test_case("3 1", None ; "three red one white")]
    #[test_case("2", None ; "missing white")]
    #[test_case("1 1 1", None ; "extra number")]
    #[test_case("a b", None ; "not numbers")]
    #[test_case("-1 2", None ; "negative")]
    fn feedback_parsing(input: &str, expected: Option<Score>) {
        assert_eq!(parse_feedback(input, 4), expected);
    }

    #[test]
    fn command_parsing() {
        assert_eq!(parse_command("QUIT", 4), Some(Command::Quit));
        assert_eq!(parse_command("u", 4), Some(Command::Undo));
        assert_eq!(parse_command(" new ", 4), Some(Command::New));
        assert_eq!(
            parse_command("win", 4),
            Some(Command::Feedback(Score::new(4, 0)))
        );
        assert_eq!(
            parse_command("2 2", 4),
            Some(Command::Feedback(Score::new(2, 2)))
        );
        assert_eq!(parse_command("maybe", 4), None);
    }

    fn score_against(secret: &str, guess: &Code) -> Score {
        GameConfig::classic()
            .scoring()
            .score(guess, &Code::parse(secret))
    }

    #[test]
    fn session_follows_the_solver() {
        let mut session = AssistSession::new(GameConfig::classic());

        for expected in ["GRYO", "GRYP", "GRYB", "GRBY"] {
            let guess = session.suggest().unwrap();
            assert_eq!(guess, Code::parse(expected));
            let score = score_against("GRBY", &guess);
            session.record(guess, score);
        }

        assert!(session.is_solved());
        assert_eq!(session.history().len(), 4);
    }

    #[test]
    fn undo_restores_the_previous_suggestion() {
        let mut session = AssistSession::new(GameConfig::classic());
        session.record(Code::parse("GRYO"), Score::new(2, 1));
        session.record(Code::parse("GRYP"), Score::new(2, 1));
        let third = session.suggest().unwrap();

        session.record(third.clone(), Score::new(0, 0));
        assert!(session.undo());
        assert_eq!(session.suggest().unwrap(), third);

        assert!(session.undo());
        assert!(session.undo());
        assert!(!session.undo());
        assert_eq!(session.suggest().unwrap(), Code::parse("GRYO"));
    }

    fn three_of_three() -> GameConfig {
        GameConfig::new(Palette::new("ABC").unwrap(), 3).unwrap()
    }

    #[test]
    fn contradictory_scores_exhaust_the_solver() {
        let mut session = AssistSession::new(three_of_three());

        // every colour present, none ever in place
        for expected in ["ABC", "BCA", "CAB"] {
            let guess = session.suggest().unwrap();
            assert_eq!(guess, Code::parse(expected));
            session.record(guess, Score::new(0, 3));
        }
        assert_eq!(session.suggest(), Err(GameError::Exhausted { round: 3 }));

        session.new_game();
        assert!(session.history().is_empty());
        assert_eq!(session.suggest(), Ok(Code::parse("ABC")));
    }

    fn run_script(config: &GameConfig, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        assist_loop(config, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn scripted_game_is_solved() {
        let output = run_script(&GameConfig::classic(), "2 1\n2 1\n2 2\nwin\nno\n");

        assert!(output.contains("GRYB"));
        assert!(output.contains("Solved"));
        assert!(output.contains("Bye"));
    }

    #[test]
    fn end_of_input_quits() {
        let output = run_script(&GameConfig::classic(), "2 1\n");
        assert!(output.contains("Round 2"));
    }

    #[test]
    fn bad_input_is_reported() {
        let output = run_script(&GameConfig::classic(), "five\nquit\n");
        assert!(output.contains("Expected '<red> <white>'"));
    }

    #[test]
    fn scoring_a_dead_end_is_refused() {
        let output = run_script(&three_of_three(), "0 3\n0 3\n0 3\n1 1\nundo\nquit\n");

        assert!(output.contains("No guess to score"));
        assert!(output.contains("Undone"));
    }
}
