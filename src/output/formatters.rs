//! Formatting utilities for terminal output

use crate::core::{Correctness, Word};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Format a scored word as an emoji string
#[must_use]
pub fn word_to_emoji(word: &Word) -> String {
    word.letters()
        .iter()
        .map(|letter| match letter.correctness() {
            Correctness::InWordCorrectPosition => '🟩',
            Correctness::InWordDifferentPosition => '🟨',
            Correctness::NotInWord | Correctness::NotScored => '⬜',
        })
        .collect()
}

/// Format a word as spaced letters colored by feedback
///
/// Green for correct, yellow for misplaced, uncolored otherwise.
#[must_use]
pub fn colored_word(word: &Word) -> String {
    word.letters()
        .iter()
        .map(|letter| {
            let cell = format!(" {letter} ");
            match letter.correctness() {
                Correctness::InWordCorrectPosition => cell.green().bold().to_string(),
                Correctness::InWordDifferentPosition => cell.yellow().bold().to_string(),
                Correctness::NotInWord | Correctness::NotScored => cell,
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for a batch of games
///
/// Falls back to the default style if the template is rejected.
#[must_use]
pub fn batch_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn scored(guess: &str, solution: &str) -> Word {
        score(&Word::new(guess).unwrap(), &Word::new(solution).unwrap())
    }

    #[test]
    fn emoji_for_crane_against_trace() {
        assert_eq!(word_to_emoji(&scored("crane", "trace")), "🟨🟩🟩⬜🟩");
    }

    #[test]
    fn emoji_all_green() {
        assert_eq!(word_to_emoji(&scored("trace", "trace")), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn unscored_word_is_blank() {
        assert_eq!(word_to_emoji(&Word::new("crane").unwrap()), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn colored_word_keeps_letters_in_order() {
        colored::control::set_override(false);
        assert_eq!(colored_word(&scored("crane", "trace")), " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
