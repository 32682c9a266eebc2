//! Wordle Puzzler - CLI
//!
//! Play Wordle in the terminal or watch the frequency-ranked solver play it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use wordle_puzzler::{
    commands::{
        AutoplayConfig, SolveAllConfig, SolveConfig, run_autoplay, run_interactive,
        run_solve_all, solve_word,
    },
    core::Word,
    dictionary::{Dictionary, DictionarySource},
    output::{print_play_results, print_solve_all_summary, print_solve_result},
    solver::{DEFAULT_OPENING, Solver},
};


#[derive(Parser)]
#[command(
    name = "wordle_puzzler",
    about = "Wordle game simulator with a frequency-ranked filtering solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary the solver ranks and filters: 'complete' (default) or 'solutions'
    #[arg(short, long, global = true, default_value = "complete")]
    dictionary: DictionarySource,

    /// Seed for every random draw (default: OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Line-delimited file replacing the embedded complete word list
    #[arg(long, global = true, value_name = "PATH", requires = "solutions")]
    complete: Option<PathBuf>,

    /// Line-delimited file replacing the embedded solutions word list
    #[arg(long, global = true, value_name = "PATH", requires = "complete")]
    solutions: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal (default)
    Play,

    /// Let the solver play games against random solutions
    Autoplay {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "10")]
        iterations: usize,

        /// Opening guess for every game
        #[arg(short = 'f', long, default_value = DEFAULT_OPENING)]
        start_word: String,
    },

    /// Play the solver against every solution word
    SolveAll {
        /// Opening guess for every game
        #[arg(short = 'f', long, default_value = DEFAULT_OPENING)]
        start_word: String,

        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Opening guess
        #[arg(short = 'f', long, default_value = DEFAULT_OPENING)]
        start_word: String,

        /// Show candidate counts after each filter stage
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the letter occurrence table as CSV
    Occurrences,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.complete.as_deref(), cli.solutions.as_deref())?;
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let solver = Solver::new(&dictionary, cli.dictionary);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_interactive(&dictionary, &solver, &mut rng),
        Commands::Autoplay {
            iterations,
            start_word,
        } => {
            let config = AutoplayConfig {
                iterations,
                start_word: start_word_or_default(&dictionary, &solver, &start_word),
            };
            let results = run_autoplay(&dictionary, &solver, &config, &mut rng);
            print_play_results(&results, cli.dictionary);
            Ok(())
        }
        Commands::SolveAll { start_word, limit } => {
            let config = SolveAllConfig {
                start_word: start_word_or_default(&dictionary, &solver, &start_word),
                limit,
                seed: cli.seed.unwrap_or_else(|| rng.random()),
            };
            let total = dictionary.words(DictionarySource::Solutions).len();
            println!("🎯 Testing {} words...", limit.map_or(total, |n| n.min(total)));
            let results = run_solve_all(&dictionary, &solver, &config);
            print_solve_all_summary(&results);
            Ok(())
        }
        Commands::Solve {
            word,
            start_word,
            verbose,
        } => {
            let start_word = start_word_or_default(&dictionary, &solver, &start_word);
            let config = SolveConfig::new(word, start_word);
            let result = solve_word(config, &dictionary, &solver, &mut rng)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Occurrences => {
            println!("The occurrences of each letter in the {} dictionary", cli.dictionary);
            print!("{}", dictionary.occurrences(cli.dictionary).to_csv());
            Ok(())
        }
    }
}

/// Load the embedded word lists, or both lists from files
fn load_dictionary(complete: Option<&Path>, solutions: Option<&Path>) -> Result<Dictionary> {
    let dictionary = match (complete, solutions) {
        (Some(complete), Some(solutions)) => Dictionary::from_files(complete, solutions)
            .with_context(|| {
                format!(
                    "Failed to load word lists from {} and {}",
                    complete.display(),
                    solutions.display()
                )
            })?,
        _ => Dictionary::embedded().context("Embedded word lists are invalid")?,
    };

    let missing = dictionary.solutions_missing_from_complete();
    if !missing.is_empty() {
        eprintln!(
            "{}",
            format!(
                "Warning: {} solution words are not in the complete dictionary and can never be guessed",
                missing.len()
            )
            .yellow()
        );
    }

    Ok(dictionary)
}

/// Resolve the opening word, falling back to the solver's default when it is not recognized
fn start_word_or_default(dictionary: &Dictionary, solver: &Solver<'_>, text: &str) -> Word {
    dictionary.recognize(text).unwrap_or_else(|_| {
        let fallback = solver.default_opening();
        eprintln!(
            "{}",
            format!("Start word not recognized; using {fallback}").yellow()
        );
        fallback
    })
}
