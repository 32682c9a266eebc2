//! Main Wordle solver interface

use super::pipeline::{FilterContext, Pipeline};
use super::rank::rank_words;
use crate::core::Word;
use crate::dictionary::{Dictionary, DictionarySource};
use crate::game::Game;
use rand::Rng;

/// Preferred opening word
pub const DEFAULT_OPENING: &str = "crane";

/// Frequency-ranked filtering solver
///
/// Ranks its dictionary once at construction, then narrows it on every turn
/// with an ordered filter pipeline.
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    source: DictionarySource,
    ranked: Vec<Word>,
    pipeline: Pipeline,
}

impl<'a> Solver<'a> {
    /// Create a solver over one of the dictionary's word lists
    ///
    /// The chosen list is both the candidate pool and the basis for ranking
    /// statistics.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, source: DictionarySource) -> Self {
        Self::with_pipeline(dictionary, source, Pipeline::standard())
    }

    /// Create a solver with a custom filter pipeline
    #[must_use]
    pub fn with_pipeline(
        dictionary: &'a Dictionary,
        source: DictionarySource,
        pipeline: Pipeline,
    ) -> Self {
        let ranked = rank_words(dictionary.words(source), dictionary.occurrences(source));
        Self {
            dictionary,
            source,
            ranked,
            pipeline,
        }
    }

    #[must_use]
    pub const fn source(&self) -> DictionarySource {
        self.source
    }

    /// The dictionary in rank order, highest first
    #[must_use]
    pub fn ranked(&self) -> &[Word] {
        &self.ranked
    }

    /// Opening word to use when none is given
    ///
    /// [`DEFAULT_OPENING`] when the dictionary accepts it, otherwise the
    /// solver's top-ranked word.
    #[must_use]
    pub fn default_opening(&self) -> Word {
        // Word lists are never empty, checked in `Dictionary::new`
        self.dictionary
            .recognize(DEFAULT_OPENING)
            .unwrap_or(self.ranked[0])
    }

    fn context<'s>(&'s self, history: &'s [Word]) -> FilterContext<'s> {
        FilterContext {
            history,
            ranked: &self.ranked,
            occurrences: self.dictionary.occurrences(self.source),
        }
    }

    /// Candidates still consistent with the history, best first
    #[must_use]
    pub fn candidates<'s>(&'s self, history: &'s [Word]) -> Vec<&'s Word> {
        self.pipeline.run(&self.context(history))
    }

    /// Candidates plus the size left after each pipeline stage that ran
    #[must_use]
    pub fn candidates_traced<'s>(
        &'s self,
        history: &'s [Word],
    ) -> (Vec<&'s Word>, Vec<(&'static str, usize)>) {
        let mut trace = Vec::new();
        let candidates = self
            .pipeline
            .run_observed(&self.context(history), |name, count| trace.push((name, count)));
        (candidates, trace)
    }

    /// Suggest the next guess for a game
    ///
    /// Returns `None` before the first guess; the opening word is the caller's
    /// choice. A solved game returns its last guess. When the filters leave
    /// nothing, a word is drawn at random from the solver's dictionary.
    pub fn solve_one<R: Rng + ?Sized>(&self, game: &Game<'_>, rng: &mut R) -> Option<Word> {
        let last = game.words().last()?;
        if game.is_solved() {
            return Some(*last);
        }

        let guess = self
            .candidates(game.words())
            .first()
            .map_or_else(|| self.dictionary.random(self.source, rng), |word| **word);
        Some(guess)
    }

    /// Play a game to completion, opening with `start`
    ///
    /// Stops early if the game rejects a guess.
    pub fn play<R: Rng + ?Sized>(&self, game: &mut Game<'_>, start: &Word, rng: &mut R) {
        while !game.is_complete() {
            let guess = if game.words().is_empty() {
                *start
            } else {
                match self.solve_one(game, rng) {
                    Some(word) => word,
                    None => break,
                }
            };

            if game.guess(&guess.text()).is_none() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use crate::game::{GUESS_LIMIT, GameState};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "crane", "trace", "slate", "irate", "crate", "grate", "react", "caret", "light", "night",
        "might", "sight", "tight", "fight", "right", "robot", "floor", "speed", "erase", "zesty",
    ];

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(WORDS), words_from_slice(&WORDS[..16])).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn no_suggestion_before_first_guess() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, DictionarySource::Complete);
        let game = Game::with_solution(&dictionary, word("trace"));

        assert_eq!(solver.solve_one(&game, &mut StdRng::seed_from_u64(0)), None);
    }

    #[test]
    fn solved_game_returns_last_guess() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, DictionarySource::Complete);
        let mut game = Game::with_solution(&dictionary, word("trace"));
        game.guess("trace").unwrap();

        let suggestion = solver.solve_one(&game, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(&suggestion, game.words().last().unwrap());
        assert!(suggestion.is_solved());
    }

    #[test]
    fn suggestion_is_consistent_with_feedback() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, DictionarySource::Complete);
        let mut game = Game::with_solution(&dictionary, word("trace"));
        game.guess("crane").unwrap();

        let candidates: Vec<String> = solver
            .candidates(game.words())
            .iter()
            .map(|w| w.text())
            .collect();
        // ?RA?E, no C up front, needs C, no N: only TRACE is left
        assert_eq!(candidates, vec!["TRACE"]);

        let suggestion = solver.solve_one(&game, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(suggestion.text(), candidates[0]);
    }

    #[test]
    fn ranked_dictionary_covers_source() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, DictionarySource::Solutions);
        assert_eq!(solver.ranked().len(), 16);
        assert_eq!(solver.source(), DictionarySource::Solutions);
    }

    #[test]
    fn falls_back_to_random_word_when_filters_exhausted() {
        let dictionary = dictionary();
        // ZESTY is only in the complete list, so the solutions solver can never find it
        let solver = Solver::new(&dictionary, DictionarySource::Solutions);
        let mut game = Game::with_solution(&dictionary, word("zesty"));
        game.guess("speed").unwrap();

        assert!(solver.candidates(game.words()).is_empty());
        let suggestion = solver.solve_one(&game, &mut StdRng::seed_from_u64(3)).unwrap();
        assert!(
            dictionary
                .words(DictionarySource::Solutions)
                .iter()
                .any(|w| w.same_letters(&suggestion))
        );
    }

    #[test]
    fn autoplay_runs_to_completion() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, DictionarySource::Complete);
        let start = word("crane");

        for solution in dictionary.words(DictionarySource::Solutions) {
            let mut game = Game::with_solution(&dictionary, *solution);
            solver.play(&mut game, &start, &mut StdRng::seed_from_u64(1));

            assert!(game.is_complete());
            assert!(game.words().len() <= GUESS_LIMIT);
            assert_eq!(game.words()[0].text(), "CRANE");
        }
    }

    #[test]
    fn true_solution_survives_every_turn() {
        let dictionary = Dictionary::embedded().unwrap();
        let solver = Solver::new(&dictionary, DictionarySource::Solutions);
        let start = word("crane");
        let mut rng = StdRng::seed_from_u64(11);

        for solution in dictionary.words(DictionarySource::Solutions).iter().step_by(13) {
            let mut game = Game::with_solution(&dictionary, *solution);
            game.guess(&start.text()).unwrap();

            while !game.is_complete() {
                let candidates = solver.candidates(game.words());
                assert!(
                    candidates.iter().any(|c| c.same_letters(solution)),
                    "{solution} filtered out after {:?}",
                    game.words().iter().map(Word::text).collect::<Vec<_>>()
                );
                let next = solver.solve_one(&game, &mut rng).unwrap();
                game.guess(&next.text()).unwrap();
            }
        }
    }

    #[test]
    fn seeded_autoplay_is_deterministic() {
        let dictionary = dictionary();
        // Solutions solver against complete-only words exercises the random fallback
        let solver = Solver::new(&dictionary, DictionarySource::Solutions);
        let start = word("speed");

        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::new(&dictionary, &mut rng);
            solver.play(&mut game, &start, &mut rng);
            let mut lost = Game::with_solution(&dictionary, word("zesty"));
            solver.play(&mut lost, &start, &mut rng);
            (
                game.words().iter().map(Word::text).collect::<Vec<_>>(),
                lost.words().iter().map(Word::text).collect::<Vec<_>>(),
            )
        };

        assert_eq!(run(2024), run(2024));
        let (_, lost) = run(5);
        assert_eq!(lost.len(), GUESS_LIMIT);
    }

    #[test]
    fn unrecognized_start_word_stops_play() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, DictionarySource::Complete);
        let mut game = Game::with_solution(&dictionary, word("trace"));

        solver.play(&mut game, &word("qqqqq"), &mut StdRng::seed_from_u64(0));
        assert_eq!(game.state(), GameState::Created);
    }

    #[test]
    fn default_opening_prefers_crane() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, DictionarySource::Complete);
        assert_eq!(solver.default_opening().text(), "CRANE");
    }

    #[test]
    fn default_opening_falls_back_to_top_ranked_word() {
        let dictionary = Dictionary::new(
            words_from_slice(&["fjord", "slate", "irate"]),
            words_from_slice(&["slate"]),
        )
        .unwrap();
        let solver = Solver::new(&dictionary, DictionarySource::Complete);

        let opening = solver.default_opening();
        assert_eq!(opening, solver.ranked()[0]);
        assert!(dictionary.contains(&opening));

        let mut game = Game::with_solution(&dictionary, word("slate"));
        solver.play(&mut game, &opening, &mut StdRng::seed_from_u64(0));
        assert!(game.is_solved());
    }

    #[test]
    fn last_letter_endgame_prefers_common_letter() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, DictionarySource::Complete);
        let mut game = Game::with_solution(&dictionary, word("night"));
        game.guess("light").unwrap();

        let candidates = solver.candidates(game.words());
        assert!(candidates.iter().all(|w| !w.matches_on(b'L', 1)));
        assert!(candidates.iter().any(|w| w.text() == "NIGHT"));
        // T is the most common letter in the dictionary
        assert_eq!(candidates[0].text(), "TIGHT");
    }
}
