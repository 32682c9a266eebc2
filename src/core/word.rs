//! Wordle word representation
//!
//! A Word is five positioned letters. A freshly built word is unscored; scoring
//! produces a new Word carrying feedback and never touches its input.

use super::letter::{Correctness, Letter};
use rustc_hash::FxHashSet;
use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [Letter; WORD_LENGTH],
}

/// Error type for words that cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
    /// Well-formed, but absent from the complete dictionary
    Unrecognized(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
            Self::Unrecognized(text) => write!(f, "{text} is not in the dictionary"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new unscored Word from a string
    ///
    /// Only the shape is checked here; membership in the dictionary is
    /// checked by [`crate::dictionary::Dictionary::recognize`].
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_puzzler::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(Letter::is_valid) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [Letter::new(b'A', 1, Correctness::NotScored); WORD_LENGTH];
        for (i, byte) in text.bytes().enumerate() {
            letters[i] = Letter::new(byte.to_ascii_uppercase(), i + 1, Correctness::NotScored);
        }

        Ok(Self { letters })
    }

    pub(crate) const fn from_letters(letters: [Letter; WORD_LENGTH]) -> Self {
        Self { letters }
    }

    /// Get the word as an uppercase string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|l| char::from(l.value())).collect()
    }

    /// Get the letter values as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> [u8; WORD_LENGTH] {
        self.letters.map(Letter::value)
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a 1-based position
    ///
    /// # Panics
    /// Panics if position is not within 1..=5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position - 1]
    }

    /// Check if the word contains a letter value anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, value: u8) -> bool {
        self.letters.iter().any(|l| l.value() == value)
    }

    /// Check if the letter value sits at a 1-based position
    #[inline]
    #[must_use]
    pub fn matches_on(&self, value: u8, position: usize) -> bool {
        self.letters
            .get(position.wrapping_sub(1))
            .is_some_and(|l| l.value() == value)
    }

    /// True when every given value appears somewhere in the word
    pub fn has_all_letters(&self, values: impl IntoIterator<Item = u8>) -> bool {
        values.into_iter().all(|v| self.has_letter(v))
    }

    /// True when at least one given value appears somewhere in the word
    pub fn has_any_letter(&self, values: impl IntoIterator<Item = u8>) -> bool {
        values.into_iter().any(|v| self.has_letter(v))
    }

    /// True when any of the letters has the same value at its own position here
    pub fn has_letter_in_same_position(&self, letters: impl IntoIterator<Item = Letter>) -> bool {
        letters
            .into_iter()
            .any(|l| self.matches_on(l.value(), l.position()))
    }

    /// Letter values in first-seen order, duplicates removed
    #[must_use]
    pub fn distinct_values(&self) -> Vec<u8> {
        let mut seen = FxHashSet::default();
        self.letters
            .iter()
            .map(|l| l.value())
            .filter(|v| seen.insert(*v))
            .collect()
    }

    /// Whether the word carries feedback
    #[inline]
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.letters.iter().all(|l| l.correctness().is_scored())
    }

    /// Whether every letter is in its correct position
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.letters
            .iter()
            .all(|l| l.correctness() == Correctness::InWordCorrectPosition)
    }

    /// Number of letters carrying the given tag
    #[must_use]
    pub fn count_of(&self, correctness: Correctness) -> usize {
        self.letters
            .iter()
            .filter(|l| l.correctness() == correctness)
            .count()
    }

    /// Compare letter values only, ignoring feedback
    #[inline]
    #[must_use]
    pub fn same_letters(&self, other: &Self) -> bool {
        self.bytes() == other.bytes()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
