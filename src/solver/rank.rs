//! Dictionary ranking
//!
//! A word's rank is the sum, over its distinct letters, of each letter's total
//! occurrence count in the dictionary. Higher ranks favour words built from
//! common letters.

use crate::core::Word;
use crate::dictionary::OccurrenceTable;
use std::cmp::Reverse;

/// Rank of a single word
#[must_use]
pub fn rank(word: &Word, occurrences: &OccurrenceTable) -> u32 {
    word.distinct_values()
        .into_iter()
        .map(|value| occurrences.count(value))
        .sum()
}

/// Words sorted by descending rank
///
/// The sort is stable, so equally ranked words keep their dictionary order.
#[must_use]
pub fn rank_words(words: &[Word], occurrences: &OccurrenceTable) -> Vec<Word> {
    let mut ranked = words.to_vec();
    ranked.sort_by_key(|word| Reverse(rank(word, occurrences)));
    ranked
}
