//! Dictionaries for Wordle
//!
//! Two immutable word lists: `Complete` (every accepted guess) and `Solutions`
//! (the answer pool), each with an occurrence table. A [`Dictionary`] is built
//! once and shared by reference with every game and solver.

mod embedded;
pub mod loader;
mod occurrences;

pub use embedded::{COMPLETE, COMPLETE_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
pub use occurrences::OccurrenceTable;

use crate::core::{WORD_LENGTH, Word, WordError};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Which word list to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DictionarySource {
    #[default]
    Complete,
    Solutions,
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => write!(f, "Complete"),
            Self::Solutions => write!(f, "Solutions"),
        }
    }
}

impl FromStr for DictionarySource {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "complete" | "all" => Ok(Self::Complete),
            "solutions" | "answers" => Ok(Self::Solutions),
            _ => Err(DictionaryError::UnknownSource(s.to_string())),
        }
    }
}

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    Io(io::Error),
    /// A word list contained no valid words
    Empty(DictionarySource),
    UnknownSource(String),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Empty(source) => write!(f, "{source} dictionary has no valid words"),
            Self::UnknownSource(name) => {
                write!(f, "Unknown dictionary '{name}' (expected complete or solutions)")
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Word lists and their occurrence tables
///
/// `Solutions ⊆ Complete` is expected but not enforced; see
/// [`Dictionary::solutions_missing_from_complete`].
#[derive(Debug, Clone)]
pub struct Dictionary {
    complete: Vec<Word>,
    solutions: Vec<Word>,
    recognized: FxHashSet<[u8; WORD_LENGTH]>,
    complete_occurrences: OccurrenceTable,
    solutions_occurrences: OccurrenceTable,
}

impl Dictionary {
    /// Build a dictionary from already loaded word lists
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if either list has no words.
    pub fn new(complete: Vec<Word>, solutions: Vec<Word>) -> Result<Self, DictionaryError> {
        if complete.is_empty() {
            return Err(DictionaryError::Empty(DictionarySource::Complete));
        }
        if solutions.is_empty() {
            return Err(DictionaryError::Empty(DictionarySource::Solutions));
        }

        let recognized = complete.iter().map(Word::bytes).collect();
        let complete_occurrences = OccurrenceTable::from_words(&complete);
        let solutions_occurrences = OccurrenceTable::from_words(&solutions);

        Ok(Self {
            complete,
            solutions,
            recognized,
            complete_occurrences,
            solutions_occurrences,
        })
    }

    /// Dictionary built from the word lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if an embedded list has no valid words.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(
            loader::words_from_slice(COMPLETE),
            loader::words_from_slice(SOLUTIONS),
        )
    }

    /// Dictionary loaded from two line-delimited files
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or holds no valid words.
    pub fn from_files(
        complete: impl AsRef<Path>,
        solutions: impl AsRef<Path>,
    ) -> Result<Self, DictionaryError> {
        Self::new(
            loader::load_from_file(complete)?,
            loader::load_from_file(solutions)?,
        )
    }

    /// Words of the given list, in load order
    #[must_use]
    pub fn words(&self, source: DictionarySource) -> &[Word] {
        match source {
            DictionarySource::Complete => &self.complete,
            DictionarySource::Solutions => &self.solutions,
        }
    }

    /// Occurrence table computed over the given list
    #[must_use]
    pub fn occurrences(&self, source: DictionarySource) -> &OccurrenceTable {
        match source {
            DictionarySource::Complete => &self.complete_occurrences,
            DictionarySource::Solutions => &self.solutions_occurrences,
        }
    }

    /// Whether the word's letters are in the complete list
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.recognized.contains(&word.bytes())
    }

    /// Build an unscored word from guess text, accepting only known words
    ///
    /// # Errors
    ///
    /// Returns the shape error from [`Word::new`], or `WordError::Unrecognized`
    /// if the word is not in the complete list.
    ///
    /// # Examples
    /// ```
    /// use wordle_puzzler::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded().unwrap();
    /// assert!(dictionary.recognize("crane").is_ok());
    /// assert!(dictionary.recognize("qqqqq").is_err());
    /// ```
    pub fn recognize(&self, text: &str) -> Result<Word, WordError> {
        let word = Word::new(text)?;
        if self.contains(&word) {
            Ok(word)
        } else {
            Err(WordError::Unrecognized(word.text()))
        }
    }

    /// Draw a word uniformly at random from the given list
    pub fn random<R: Rng + ?Sized>(&self, source: DictionarySource, rng: &mut R) -> Word {
        let words = self.words(source);
        // Lists are never empty, checked in `new`
        words[rng.random_range(0..words.len())]
    }

    /// Solutions whose letters are absent from the complete list
    #[must_use]
    pub fn solutions_missing_from_complete(&self) -> Vec<&Word> {
        self.solutions
            .iter()
            .filter(|word| !self.contains(word))
            .collect()
    }
}
