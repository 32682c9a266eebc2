//! Ordered filter pipeline
//!
//! A pipeline is a list of named filter stages run in order. Each stage maps the
//! current candidates to a narrower set. Once a stage leaves exactly one
//! candidate the remaining stages are skipped.

use super::filters;
use crate::core::Word;
use crate::dictionary::OccurrenceTable;

/// Read-only inputs shared by every filter
#[derive(Clone, Copy)]
pub struct FilterContext<'a> {
    /// Scored guesses so far, oldest first
    pub history: &'a [Word],
    /// The solver's dictionary in rank order
    pub ranked: &'a [Word],
    /// Occurrence table of the solver's dictionary
    pub occurrences: &'a OccurrenceTable,
}

/// A single narrowing step
pub type Filter = for<'a> fn(&FilterContext<'a>, Vec<&'a Word>) -> Vec<&'a Word>;

/// A filter with a name for reporting
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub filter: Filter,
}

impl Stage {
    #[must_use]
    pub const fn new(name: &'static str, filter: Filter) -> Self {
        Self { name, filter }
    }
}

/// Filter stages applied in order
#[derive(Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    #[must_use]
    pub const fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// The seven-stage chain used by [`crate::solver::Solver::new`]
    ///
    /// Order matters: later stages assume the earlier ones already ran.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Stage::new("reset", filters::reset),
            Stage::new("correct positions", filters::correct_positions),
            Stage::new("misplaced positions", filters::misplaced_positions),
            Stage::new("required letters", filters::required_letters),
            Stage::new("excluded letters", filters::excluded_letters),
            Stage::new("previously played", filters::previously_played),
            Stage::new("one remaining letter", filters::one_remaining_letter),
        ])
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Run every stage, starting from no candidates
    #[must_use]
    pub fn run<'a>(&self, context: &FilterContext<'a>) -> Vec<&'a Word> {
        self.run_observed(context, |_, _| {})
    }

    /// Run every stage, reporting each stage name and its output size
    ///
    /// Skipped stages are not reported.
    pub fn run_observed<'a>(
        &self,
        context: &FilterContext<'a>,
        mut observe: impl FnMut(&'static str, usize),
    ) -> Vec<&'a Word> {
        let mut candidates = Vec::new();

        for stage in &self.stages {
            if candidates.len() == 1 {
                break;
            }
            candidates = (stage.filter)(context, candidates);
            observe(stage.name, candidates.len());
        }

        candidates
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}
