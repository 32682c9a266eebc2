//! Wordle game state machine
//!
//! A game holds a hidden solution and the scored guesses made against it.
//! Guesses are validated against the complete dictionary; rejected guesses
//! leave the game untouched.

use crate::core::{Word, score};
use crate::dictionary::{Dictionary, DictionarySource};
use rand::Rng;

/// Maximum number of recorded guesses per game
pub const GUESS_LIMIT: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No guesses yet
    Created,
    /// Number of guesses made so far, below the limit
    InProgress(usize),
    Solved,
    Lost,
}

/// Outcome of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// The guess with feedback
    pub word: Word,
    /// The hidden solution, revealed only once the game is lost
    pub solution: Option<Word>,
}

/// A single game of Wordle
#[derive(Debug, Clone)]
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    solution: Word,
    words: Vec<Word>,
}

impl<'a> Game<'a> {
    /// Start a game with a solution drawn uniformly from the solutions list
    pub fn new<R: Rng + ?Sized>(dictionary: &'a Dictionary, rng: &mut R) -> Self {
        let solution = dictionary.random(DictionarySource::Solutions, rng);
        Self::with_solution(dictionary, solution)
    }

    /// Start a game with a known solution
    #[must_use]
    pub fn with_solution(dictionary: &'a Dictionary, solution: Word) -> Self {
        Self {
            dictionary,
            solution,
            words: Vec::with_capacity(GUESS_LIMIT),
        }
    }

    /// Play a guess
    ///
    /// Returns `None`, changing nothing, when the text is blank, is not five
    /// ASCII letters, or is not in the complete dictionary.
    ///
    /// An accepted guess is scored and recorded while fewer than
    /// [`GUESS_LIMIT`] guesses are held, even after the game is solved. Past
    /// the limit a guess is still scored and returned but not recorded.
    ///
    /// # Examples
    /// ```
    /// use wordle_puzzler::core::Word;
    /// use wordle_puzzler::dictionary::Dictionary;
    /// use wordle_puzzler::game::Game;
    ///
    /// let dictionary = Dictionary::embedded().unwrap();
    /// let mut game = Game::with_solution(&dictionary, Word::new("trace").unwrap());
    ///
    /// assert!(game.guess("12345").is_none());
    /// let result = game.guess("crane").unwrap();
    /// assert!(!result.word.is_solved());
    /// assert_eq!(game.words().len(), 1);
    /// ```
    pub fn guess(&mut self, text: &str) -> Option<GuessResult> {
        if text.trim().is_empty() {
            return None;
        }

        let word = self.dictionary.recognize(text).ok()?;
        Some(self.record(&word))
    }

    fn record(&mut self, word: &Word) -> GuessResult {
        let scored = score(word, &self.solution);

        if self.words.len() < GUESS_LIMIT {
            self.words.push(scored);
        }

        let solution = (self.is_complete() && !self.is_solved()).then_some(self.solution);
        GuessResult {
            word: scored,
            solution,
        }
    }

    /// Whether any recorded guess is fully correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.words.iter().any(Word::is_solved)
    }

    /// Whether the game accepts no more guesses
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.words.len() >= GUESS_LIMIT || self.is_solved()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.is_solved() {
            GameState::Solved
        } else if self.words.len() >= GUESS_LIMIT {
            GameState::Lost
        } else if self.words.is_empty() {
            GameState::Created
        } else {
            GameState::InProgress(self.words.len())
        }
    }

    /// Recorded guesses, oldest first
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The hidden solution
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }
}

impl<'g> IntoIterator for &'g Game<'_> {
    type Item = &'g Word;
    type IntoIter = std::slice::Iter<'g, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
