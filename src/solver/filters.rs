//! Candidate filters
//!
//! Each filter narrows the candidate list using the feedback in the game history.
//! Every keep-condition is satisfied by the true solution, so a solution present
//! in the ranked dictionary is never filtered out.

use super::pipeline::FilterContext;
use crate::core::{Correctness, Letter, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use std::cmp::Reverse;

fn letters_tagged(history: &[Word], correctness: Correctness) -> impl Iterator<Item = Letter> + '_ {
    history
        .iter()
        .flat_map(|word| word.letters().iter().copied())
        .filter(move |letter| letter.correctness() == correctness)
}

/// Start over from the full ranked dictionary, ignoring the input
pub fn reset<'a>(context: &FilterContext<'a>, _candidates: Vec<&'a Word>) -> Vec<&'a Word> {
    context.ranked.iter().collect()
}

/// Keep words with every correctly placed letter in the same place
pub fn correct_positions<'a>(
    context: &FilterContext<'a>,
    candidates: Vec<&'a Word>,
) -> Vec<&'a Word> {
    let correct: Vec<Letter> =
        letters_tagged(context.history, Correctness::InWordCorrectPosition).collect();

    candidates
        .into_iter()
        .filter(|word| {
            correct
                .iter()
                .all(|letter| word.matches_on(letter.value(), letter.position()))
        })
        .collect()
}

/// Drop words that repeat a misplaced letter at the position it was tried
pub fn misplaced_positions<'a>(
    context: &FilterContext<'a>,
    candidates: Vec<&'a Word>,
) -> Vec<&'a Word> {
    let misplaced: Vec<Letter> =
        letters_tagged(context.history, Correctness::InWordDifferentPosition).collect();

    candidates
        .into_iter()
        .filter(|word| !word.has_letter_in_same_position(misplaced.iter().copied()))
        .collect()
}

/// Keep words containing every letter known to be in the solution
pub fn required_letters<'a>(
    context: &FilterContext<'a>,
    candidates: Vec<&'a Word>,
) -> Vec<&'a Word> {
    let required: FxHashSet<u8> = context
        .history
        .iter()
        .flat_map(|word| word.letters().iter().copied())
        .filter(|letter| letter.correctness().is_in_word())
        .map(Letter::value)
        .collect();

    candidates
        .into_iter()
        .filter(|word| word.has_all_letters(required.iter().copied()))
        .collect()
}

/// Drop words containing any letter known to be absent
pub fn excluded_letters<'a>(
    context: &FilterContext<'a>,
    candidates: Vec<&'a Word>,
) -> Vec<&'a Word> {
    let excluded: FxHashSet<u8> = letters_tagged(context.history, Correctness::NotInWord)
        .map(Letter::value)
        .collect();

    candidates
        .into_iter()
        .filter(|word| !word.has_any_letter(excluded.iter().copied()))
        .collect()
}

/// Drop words already guessed
pub fn previously_played<'a>(
    context: &FilterContext<'a>,
    candidates: Vec<&'a Word>,
) -> Vec<&'a Word> {
    candidates
        .into_iter()
        .filter(|word| !context.history.iter().any(|played| played.same_letters(word)))
        .collect()
}

/// Endgame with one unresolved position
///
/// When the latest guess has all but one letter correct, drop words that retry
/// the missed letter there and order the rest by the total occurrence count of
/// their letter at that position (most common first, ties kept in rank order).
pub fn one_remaining_letter<'a>(
    context: &FilterContext<'a>,
    candidates: Vec<&'a Word>,
) -> Vec<&'a Word> {
    let Some(previous) = context.history.last() else {
        return candidates;
    };
    if previous.count_of(Correctness::InWordCorrectPosition) != WORD_LENGTH - 1 {
        return candidates;
    }
    let Some(missed) = previous
        .letters()
        .iter()
        .find(|letter| letter.correctness() != Correctness::InWordCorrectPosition)
    else {
        return candidates;
    };

    let position = missed.position();
    let mut remaining: Vec<&Word> = candidates
        .into_iter()
        .filter(|word| !word.matches_on(missed.value(), position))
        .collect();

    remaining.sort_by_key(|word| {
        Reverse(context.occurrences.count(word.letter_at(position).value()))
    });
    remaining
}
