//! Repeated autoplay against random solutions

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::game::{GUESS_LIMIT, Game, PlayResults};
use crate::output::formatters::batch_progress;
use crate::solver::Solver;
use rand::Rng;

/// Configuration for an autoplay run
pub struct AutoplayConfig {
    pub iterations: usize,
    pub start_word: Word,
}

/// Play `iterations` games, each against a freshly drawn solution
///
/// Reports one "Success?" line per game above the progress bar.
pub fn run_autoplay<'a, R: Rng + ?Sized>(
    dictionary: &'a Dictionary,
    solver: &Solver<'_>,
    config: &AutoplayConfig,
    rng: &mut R,
) -> PlayResults<'a> {
    let pb = batch_progress(config.iterations);
    let mut results = PlayResults::new();

    for _ in 0..config.iterations {
        let mut game = Game::new(dictionary, rng);
        solver.play(&mut game, &config.start_word, rng);

        if game.is_solved() {
            pb.println(format!("Success? Yes ({})", game.words().len()));
        } else {
            pb.println(format!("Success? No ({GUESS_LIMIT})"));
        }
        pb.inc(1);

        results.add_game(game);
    }

    pb.finish_and_clear();
    results
}
