//! Letter occurrence statistics
//!
//! Counts how often each letter appears in a word list, both per position and
//! in total. Built once when a dictionary loads and read-only afterwards.

use crate::core::{ALPHABET, WORD_LENGTH, Word};
use std::fmt::Write;

/// Per-letter and per-letter-per-position counts over a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceTable {
    positional: [[u32; WORD_LENGTH]; 26],
    totals: [u32; 26],
}

#[inline]
fn index_of(letter: u8) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
}

impl OccurrenceTable {
    /// Count every letter of every word
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut table = Self {
            positional: [[0; WORD_LENGTH]; 26],
            totals: [0; 26],
        };

        for word in words {
            for letter in word.letters() {
                if let Some(idx) = index_of(letter.value()) {
                    table.positional[idx][letter.position() - 1] += 1;
                    table.totals[idx] += 1;
                }
            }
        }

        table
    }

    /// Total occurrences of a letter across all positions
    ///
    /// Non-alphabetic input counts as zero.
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        index_of(letter).map_or(0, |idx| self.totals[idx])
    }

    /// Occurrences of a letter at a 1-based position
    #[must_use]
    pub fn count_at(&self, letter: u8, position: usize) -> u32 {
        match (index_of(letter), position.checked_sub(1)) {
            (Some(idx), Some(pos)) if pos < WORD_LENGTH => self.positional[idx][pos],
            _ => 0,
        }
    }

    /// Render as CSV: `Letter,1,2,3,4,5,Total` then one row per letter
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("Letter");
        for position in 1..=WORD_LENGTH {
            let _ = write!(csv, ",{position}");
        }
        csv.push_str(",Total\n");

        for &letter in ALPHABET {
            csv.push(char::from(letter));
            for position in 1..=WORD_LENGTH {
                let _ = write!(csv, ",{}", self.count_at(letter, position));
            }
            let _ = writeln!(csv, ",{}", self.count(letter));
        }

        csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    fn sample() -> OccurrenceTable {
        OccurrenceTable::from_words(&words_from_slice(&["crane", "trace", "speed"]))
    }

    #[test]
    fn totals_count_every_occurrence() {
        let table = sample();
        assert_eq!(table.count(b'E'), 4); // crane, trace, speed x2
        assert_eq!(table.count(b'C'), 2);
        assert_eq!(table.count(b'Z'), 0);
    }

    #[test]
    fn lowercase_lookup_is_normalized() {
        let table = sample();
        assert_eq!(table.count(b'e'), table.count(b'E'));
        assert_eq!(table.count_at(b'r', 2), 2);
    }

    #[test]
    fn positional_counts() {
        let table = sample();
        assert_eq!(table.count_at(b'E', 5), 2);
        assert_eq!(table.count_at(b'E', 3), 1);
        assert_eq!(table.count_at(b'E', 4), 1);
        assert_eq!(table.count_at(b'C', 1), 1);
        assert_eq!(table.count_at(b'C', 4), 1);
    }

    #[test]
    fn out_of_range_is_zero() {
        let table = sample();
        assert_eq!(table.count_at(b'E', 0), 0);
        assert_eq!(table.count_at(b'E', 6), 0);
        assert_eq!(table.count(b'1'), 0);
    }

    #[test]
    fn positional_rows_sum_to_totals() {
        let table = sample();
        for &letter in ALPHABET {
            let sum: u32 = (1..=WORD_LENGTH).map(|p| table.count_at(letter, p)).sum();
            assert_eq!(sum, table.count(letter));
        }
    }

    #[test]
    fn csv_layout() {
        let csv = sample().to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 27);
        assert_eq!(lines[0], "Letter,1,2,3,4,5,Total");
        assert_eq!(lines[1], "A,0,0,2,0,0,2");
        assert_eq!(lines[5], "E,0,0,1,1,2,4");
    }
}
