//! Command implementations

pub mod autoplay;
pub mod interactive;
pub mod solve;
pub mod solve_all;

pub use autoplay::{AutoplayConfig, run_autoplay};
pub use interactive::{play_session, run_interactive};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_word};
pub use solve_all::{SolveAllConfig, run_solve_all};
