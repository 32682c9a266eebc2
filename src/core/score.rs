//! Guess feedback
//!
//! Each guessed letter is compared against the solution on its own:
//! - same letter at the same position: `InWordCorrectPosition`
//! - letter anywhere else in the solution: `InWordDifferentPosition`
//! - otherwise: `NotInWord`
//!
//! Presence is a plain membership test. A letter guessed twice but present once
//! in the solution is marked at every non-matching occurrence, unlike the
//! count-limited rule of the published game.

use super::letter::Correctness;
use super::word::Word;

/// Score `guess` against `solution`, returning a new scored Word
///
/// The guess is read, never modified, so an unscored word may be shared or
/// scored again freely.
///
/// # Examples
/// ```
/// use wordle_puzzler::core::{Correctness, Word, score};
///
/// let guess = Word::new("crane").unwrap();
/// let solution = Word::new("trace").unwrap();
/// let scored = score(&guess, &solution);
///
/// assert_eq!(scored.letter_at(2).correctness(), Correctness::InWordCorrectPosition);
/// assert_eq!(scored.letter_at(4).correctness(), Correctness::NotInWord);
/// ```
#[must_use]
pub fn score(guess: &Word, solution: &Word) -> Word {
    let answer = solution.bytes();
    let letters = *guess.letters();

    let letters = letters.map(|letter| {
        let value = letter.value();
        let correctness = if answer[letter.position() - 1] == value {
            Correctness::InWordCorrectPosition
        } else if answer.contains(&value) {
            Correctness::InWordDifferentPosition
        } else {
            Correctness::NotInWord
        };
        letter.scored(correctness)
    });

    Word::from_letters(letters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Correctness::{InWordCorrectPosition, InWordDifferentPosition, NotInWord};

    fn tags(guess: &str, solution: &str) -> Vec<Correctness> {
        let scored = score(&Word::new(guess).unwrap(), &Word::new(solution).unwrap());
        scored.letters().iter().map(|l| l.correctness()).collect()
    }

    #[test]
    fn crane_against_trace() {
        assert_eq!(
            tags("crane", "trace"),
            vec![
                InWordDifferentPosition,
                InWordCorrectPosition,
                InWordCorrectPosition,
                NotInWord,
                InWordCorrectPosition,
            ]
        );
    }

    #[test]
    fn all_gray() {
        assert_eq!(tags("abcde", "fghij"), vec![NotInWord; 5]);
    }

    #[test]
    fn solution_against_itself_is_solved() {
        for text in ["crane", "slate", "speed", "aaaaa"] {
            let word = Word::new(text).unwrap();
            let scored = score(&word, &word);
            assert!(scored.is_solved(), "{text} should score all correct");
        }
    }

    #[test]
    fn duplicates_marked_by_membership_only() {
        // One E in TRACE, yet every misplaced E in GEESE gets credit
        assert_eq!(
            tags("geese", "trace"),
            vec![
                NotInWord,
                InWordDifferentPosition,
                InWordDifferentPosition,
                NotInWord,
                InWordCorrectPosition,
            ]
        );
    }

    #[test]
    fn repeated_letter_after_exact_match_still_in_word() {
        // ROBOT vs FLOOR: first O misplaced, second O exact
        assert_eq!(
            tags("robot", "floor"),
            vec![
                InWordDifferentPosition,
                InWordDifferentPosition,
                NotInWord,
                InWordCorrectPosition,
                NotInWord,
            ]
        );
    }

    #[test]
    fn guess_is_not_mutated() {
        let guess = Word::new("crane").unwrap();
        let before = guess;
        let _ = score(&guess, &Word::new("trace").unwrap());
        assert_eq!(guess, before);
        assert!(!guess.is_scored());
    }

    #[test]
    fn correct_iff_same_letter_and_never_gray_when_present() {
        let words = ["crane", "trace", "speed", "erase", "robot", "floor", "geese", "aback"];
        for g in words {
            for s in words {
                let guess = Word::new(g).unwrap();
                let solution = Word::new(s).unwrap();
                let scored = score(&guess, &solution);

                assert!(scored.is_scored());
                for letter in scored.letters() {
                    let exact = solution.letter_at(letter.position()).value() == letter.value();
                    assert_eq!(letter.correctness() == InWordCorrectPosition, exact);
                    if solution.has_letter(letter.value()) {
                        assert_ne!(letter.correctness(), NotInWord);
                    }
                }
            }
        }
    }
}
