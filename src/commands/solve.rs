//! Word solving command
//!
//! Plays the solver against a chosen target and records each step.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::game::Game;
use crate::solver::Solver;
use anyhow::{Context, Result, anyhow};
use rand::Rng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub start_word: Word,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, start_word: Word) -> Self {
        Self { target, start_word }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<SolveStep>,
    pub target: Word,
}

/// A single guess in the solution
pub struct SolveStep {
    /// The guess with feedback
    pub word: Word,
    /// Candidates the solver chose from, `None` for the opening word
    pub candidates: Option<usize>,
    /// Size after each pipeline stage that ran
    pub stages: Vec<(&'static str, usize)>,
}

/// Solve a specific word with the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a 5-letter word
/// - A guess is rejected by the game
pub fn solve_word<R: Rng + ?Sized>(
    config: SolveConfig,
    dictionary: &Dictionary,
    solver: &Solver<'_>,
    rng: &mut R,
) -> Result<SolveResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("Invalid target word '{}'", config.target))?;

    let mut game = Game::with_solution(dictionary, target);
    let mut steps = Vec::new();

    while !game.is_complete() {
        let (guess, candidates, stages) = if game.words().is_empty() {
            (config.start_word, None, Vec::new())
        } else {
            let (candidates, stages) = solver.candidates_traced(game.words());
            let count = candidates.len();
            let guess = solver
                .solve_one(&game, rng)
                .ok_or_else(|| anyhow!("Solver has no suggestion"))?;
            (guess, Some(count), stages)
        };

        let result = game
            .guess(&guess.text())
            .ok_or_else(|| anyhow!("{guess} is not in the dictionary"))?;

        steps.push(SolveStep {
            word: result.word,
            candidates,
            stages,
        });
    }

    Ok(SolveResult {
        success: game.is_solved(),
        steps,
        target,
    })
}
