//! Wordle games
//!
//! The game state machine and statistics over batches of finished games.

mod results;
mod state;

pub use results::PlayResults;
pub use state::{GUESS_LIMIT, Game, GameState, GuessResult};
