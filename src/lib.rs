//! Wordle Puzzler
//!
//! A Wordle game simulator with a frequency-ranked filtering solver.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_puzzler::dictionary::{Dictionary, DictionarySource};
//! use wordle_puzzler::game::Game;
//! use wordle_puzzler::solver::Solver;
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let solver = Solver::new(&dictionary, DictionarySource::Complete);
//!
//! let mut rng = rand::rng();
//! let mut game = Game::new(&dictionary, &mut rng);
//! game.guess("crane").unwrap();
//!
//! let next = solver.solve_one(&game, &mut rng).unwrap();
//! println!("Next guess: {next}");
//! ```

// Core domain types
pub mod core;

// Word lists and letter statistics
pub mod dictionary;

// Game state and batch results
pub mod game;

// Solving algorithm
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
