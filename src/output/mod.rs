//! Terminal output formatting
//!
//! Display utilities for game feedback and command results.

pub mod display;
pub mod formatters;

pub use display::{print_play_results, print_solve_all_summary, print_solve_result};
pub use formatters::{colored_word, word_to_emoji};
