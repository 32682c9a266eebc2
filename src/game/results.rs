//! Aggregate statistics over finished games

use super::state::{GUESS_LIMIT, Game};
use std::collections::BTreeMap;

/// A batch of played games
#[derive(Debug, Default)]
pub struct PlayResults<'a> {
    games: Vec<Game<'a>>,
}

impl<'a> PlayResults<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self { games: Vec::new() }
    }

    pub fn add_game(&mut self, game: Game<'a>) {
        self.games.push(game);
    }

    #[must_use]
    pub fn games(&self) -> &[Game<'a>] {
        &self.games
    }

    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.games.iter().filter(|g| g.is_solved()).count()
    }

    /// Games that ended without a solve
    pub fn lost(&self) -> impl Iterator<Item = &Game<'a>> {
        self.games.iter().filter(|g| !g.is_solved())
    }

    /// Percentage of games solved, 0 for an empty batch
    #[must_use]
    pub fn win_loss(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.solved_count() as f64 / self.games.len() as f64 * 100.0
    }

    /// Mean guess count among solved games
    ///
    /// Falls back to the guess limit when nothing was solved.
    #[must_use]
    pub fn words_per_solved_game_average(&self) -> f64 {
        let solved = self.solved_count();
        if solved == 0 {
            return GUESS_LIMIT as f64;
        }

        let words: usize = self
            .games
            .iter()
            .filter(|g| g.is_solved())
            .map(|g| g.words().len())
            .sum();
        words as f64 / solved as f64
    }

    /// Number of solved games per guess count
    #[must_use]
    pub fn solved_distribution(&self) -> BTreeMap<usize, usize> {
        let mut distribution = BTreeMap::new();
        for game in self.games.iter().filter(|g| g.is_solved()) {
            *distribution.entry(game.words().len()).or_insert(0) += 1;
        }
        distribution
    }
}

impl<'a> FromIterator<Game<'a>> for PlayResults<'a> {
    fn from_iter<I: IntoIterator<Item = Game<'a>>>(iter: I) -> Self {
        Self {
            games: iter.into_iter().collect(),
        }
    }
}
