//! Wordle solving
//!
//! The solver ranks its dictionary by letter frequency once, then on each turn
//! runs an ordered filter pipeline over the ranked words and guesses the first
//! survivor.

mod engine;
pub mod filters;
mod pipeline;
pub mod rank;

pub use engine::{DEFAULT_OPENING, Solver};
pub use pipeline::{Filter, FilterContext, Pipeline, Stage};
