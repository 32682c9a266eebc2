//! Letter and correctness representation
//!
//! A letter is an uppercase ASCII value bound to a 1-based position, tagged with
//! how it relates to the hidden solution once scored.

use std::fmt;

/// The letters a word may contain
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Feedback for a single guessed letter
///
/// `NotScored` is the state of every letter in a freshly constructed word; the
/// other three are only ever produced by [`crate::core::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Correctness {
    #[default]
    NotScored,
    NotInWord,
    InWordDifferentPosition,
    InWordCorrectPosition,
}

impl Correctness {
    /// Whether scoring has assigned this tag
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::NotScored)
    }

    /// Whether the letter is known to be somewhere in the solution
    #[inline]
    #[must_use]
    pub const fn is_in_word(self) -> bool {
        matches!(
            self,
            Self::InWordCorrectPosition | Self::InWordDifferentPosition
        )
    }
}

/// A single letter of a word
///
/// Fields are private so a scored letter cannot be re-tagged after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    value: u8,
    position: usize,
    correctness: Correctness,
}

impl Letter {
    pub(crate) const fn new(value: u8, position: usize, correctness: Correctness) -> Self {
        Self {
            value,
            position,
            correctness,
        }
    }

    /// Uppercase ASCII byte of this letter
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Position within the word, 1 through 5
    #[inline]
    #[must_use]
    pub const fn position(self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn correctness(self) -> Correctness {
        self.correctness
    }

    /// Same value and position with a freshly computed tag
    #[inline]
    pub(crate) const fn scored(self, correctness: Correctness) -> Self {
        Self::new(self.value, self.position, correctness)
    }

    /// Check whether a character may appear in a word (case-insensitive A-Z)
    #[inline]
    #[must_use]
    pub const fn is_valid(value: char) -> bool {
        value.is_ascii_alphabetic()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(self.value))
    }
}
