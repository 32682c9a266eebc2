//! Core domain types for Wordle
//!
//! Letters, words and the scoring rule. Everything here is a plain value type
//! with no knowledge of dictionaries or games.

mod letter;
mod score;
mod word;

pub use letter::{ALPHABET, Correctness, Letter};
pub use score::score;
pub use word::{WORD_LENGTH, Word, WordError};
