//! Interactive console game
//!
//! Reads guesses line by line, prints colored feedback, and offers a new game
//! when one ends. Typing `hint` asks the solver for a suggestion.

use crate::dictionary::Dictionary;
use crate::game::Game;
use crate::output::colored_word;
use crate::solver::Solver;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_interactive<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    solver: &Solver<'_>,
    rng: &mut R,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(dictionary, solver, rng, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the interactive game on arbitrary input and output
///
/// Ends on `quit`, on end of input, or when the player declines another game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_session<R, I, O>(
    dictionary: &Dictionary,
    solver: &Solver<'_>,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "Enter a start word to begin a game")?;
    writeln!(output, "Commands: 'hint' for a suggestion, 'quit' to exit\n")?;

    loop {
        let mut game = Game::new(dictionary, rng);

        while !game.is_complete() {
            let Some(line) = get_user_input(input, output, "Guess")? else {
                return Ok(());
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    writeln!(output, "\nThanks for playing!")?;
                    return Ok(());
                }
                "hint" => {
                    let suggestion = solver
                        .solve_one(&game, rng)
                        .or_else(|| solver.ranked().first().copied());
                    if let Some(word) = suggestion {
                        writeln!(output, "Suggested: {}", word.text().bright_cyan())?;
                    }
                    continue;
                }
                _ => {}
            }

            let Some(result) = game.guess(&line) else {
                writeln!(output, "{}", "Not recognized".red())?;
                continue;
            };

            writeln!(output, "{}", colored_word(&result.word))?;
            if game.is_solved() {
                writeln!(output, "{}", "Solved!".green().bold())?;
            } else if let Some(solution) = result.solution {
                writeln!(output, "You lose; the answer was {}", solution.text().bold())?;
            }
        }

        let Some(answer) = get_user_input(input, output, "Play again? (yes | no)")? else {
            return Ok(());
        };
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            writeln!(output, "\nThanks for playing!")?;
            return Ok(());
        }
        writeln!(output)?;
    }
}

/// Prompt and read one trimmed line, `None` at end of input
fn get_user_input<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
