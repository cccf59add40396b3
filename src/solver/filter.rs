//! Candidate filtering
//!
//! Reduces a candidate collection to the words consistent with a constraint
//! model: every letter admissible at its position, every required letter
//! present at least once.

use crate::core::{ConstraintModel, LetterSet, Pattern, Word};
use rayon::prelude::*;

/// Whether `word` fits `pattern` and contains all `required` letters
///
/// Required letters are checked for presence only, not position or count.
#[inline]
#[must_use]
pub fn is_consistent(word: &Word, pattern: &Pattern, required: LetterSet) -> bool {
    pattern.matches(word) && word.letter_set().is_superset(required)
}

/// Filter candidates against the current model
///
/// Returns the surviving words sorted in ascending lexicographic order.
/// Filtering an already filtered collection against the same model returns
/// it unchanged.
///
/// # Examples
/// ```
/// use wordle_narrow::core::{ConstraintModel, GuessFeedback, Word};
/// use wordle_narrow::solver::filter_candidates;
///
/// let words: Vec<Word> = ["slate", "crane", "trace"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut model = ConstraintModel::new();
/// model.apply_feedback(&GuessFeedback::parse("crane", "*ra_e").unwrap());
///
/// let remaining = filter_candidates(&words, &model);
/// assert_eq!(remaining, [Word::new("trace").unwrap()]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], model: &ConstraintModel) -> Vec<Word> {
    let pattern = model.to_pattern();
    let required = model.required();

    let mut remaining: Vec<Word> = candidates
        .par_iter()
        .filter(|word| is_consistent(word, &pattern, required))
        .cloned()
        .collect();

    remaining.par_sort_unstable();
    remaining
}
