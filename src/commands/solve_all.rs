//! Solve every solution word
//!
//! Each word in the solutions list is played once as the hidden answer. Games
//! run in parallel; each gets its own RNG seeded from the base seed and the
//! word's index, so a run is reproducible regardless of scheduling.

use crate::core::Word;
use crate::dictionary::{Dictionary, DictionarySource};
use crate::game::{Game, PlayResults};
use crate::output::formatters::batch_progress;
use crate::solver::Solver;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Configuration for a solve-all run
pub struct SolveAllConfig {
    pub start_word: Word,
    /// Only play the first `limit` solutions
    pub limit: Option<usize>,
    pub seed: u64,
}

/// Play the solver against every solution word, in list order
pub fn run_solve_all<'a>(
    dictionary: &'a Dictionary,
    solver: &Solver<'_>,
    config: &SolveAllConfig,
) -> PlayResults<'a> {
    let solutions = dictionary.words(DictionarySource::Solutions);
    let count = config.limit.map_or(solutions.len(), |n| n.min(solutions.len()));

    let pb = batch_progress(count);
    pb.set_message("Solving");

    let games: Vec<Game<'a>> = solutions[..count]
        .par_iter()
        .enumerate()
        .map(|(idx, solution)| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(idx as u64));
            let mut game = Game::with_solution(dictionary, *solution);
            solver.play(&mut game, &config.start_word, &mut rng);
            pb.println(game_line(&game));
            pb.inc(1);
            game
        })
        .collect();

    pb.finish_with_message("Complete!");
    games.into_iter().collect()
}

/// One report line per game: solution, whether it was solved, guess count
fn game_line(game: &Game<'_>) -> String {
    format!(
        "{}\t{} ({})",
        game.solution(),
        game.is_solved(),
        game.words().len()
    )
}
