//! Display functions for command results

use super::formatters::{colored_word, create_progress_bar, word_to_emoji};
use crate::commands::SolveResult;
use crate::dictionary::DictionarySource;
use crate::game::{GUESS_LIMIT, PlayResults};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {turn}: {} {}",
            colored_word(&step.word),
            word_to_emoji(&step.word)
        );

        match step.candidates {
            Some(count) => println!("  Candidates: {count}"),
            None => println!("  Candidates: {}", "opening word".bright_black()),
        }

        if verbose {
            for (name, count) in &step.stages {
                println!("    {name:<22} {count}");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print an autoplay summary
///
/// Every lost game is replayed word by word with its solution underneath.
pub fn print_play_results(results: &PlayResults<'_>, source: DictionarySource) {
    println!();
    for lost in results.lost() {
        for word in lost {
            println!("{}", colored_word(word));
        }
        println!("===============");
        println!("{}", colored_word(lost.solution()));
        println!();
    }

    println!("Dictionary: {source}");
    println!(
        "Average words per solved game: {}",
        format!("{:.4}", results.words_per_solved_game_average()).bright_yellow()
    );
    println!(
        "Solved games percentile: {}",
        format!("{:.2}%", results.win_loss()).bright_yellow()
    );

    print_distribution(results);
}

/// Print a solve-all summary
pub fn print_solve_all_summary(results: &PlayResults<'_>) {
    println!();
    for (guesses, count) in results.solved_distribution() {
        println!("Solved in {guesses}: {count}");
    }
    println!("Not solved: {}", results.lost().count());

    print_distribution(results);
}

fn print_distribution(results: &PlayResults<'_>) {
    let total = results.games().len();
    if total == 0 {
        return;
    }

    let distribution = results.solved_distribution();
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=GUESS_LIMIT {
        let count = distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = count as f64 / total as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    let lost = results.lost().count();
    let pct = lost as f64 / total as f64 * 100.0;
    println!(
        "   X: {} {lost:4} ({pct:5.1}%)",
        create_progress_bar(pct, 100.0, 40).red()
    );
}
