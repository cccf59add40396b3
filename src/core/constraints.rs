//! Position constraint model
//!
//! Tracks which letters remain possible at each of the 5 positions, plus the
//! letters known to appear somewhere in the answer. Feedback only ever narrows
//! the model: position sets shrink, required letters grow.
//!
//! A position set never becomes empty. An exclusion that would remove the last
//! admissible letter is skipped and reported back to the caller, since it can
//! only come from contradictory feedback.

use super::feedback::{FeedbackMark, GuessFeedback};
use super::letter::{Letter, LetterSet};
use super::pattern::Pattern;
use super::word::WORD_LENGTH;

/// Admissible letters for one position (never empty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionConstraint(LetterSet);

/// Result of excluding a letter from one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionOutcome {
    /// The letter was admissible here and is now excluded
    Removed,
    /// The letter was already excluded
    NotPresent,
    /// The letter was the last one admissible here and was kept
    Skipped,
}

/// An exclusion dropped because it would have emptied a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedExclusion {
    pub position: usize,
    pub letter: Letter,
}

impl PositionConstraint {
    #[must_use]
    pub const fn full() -> Self {
        Self(LetterSet::FULL)
    }

    #[inline]
    #[must_use]
    pub const fn letters(self) -> LetterSet {
        self.0
    }

    /// Whether a single letter remains
    #[inline]
    #[must_use]
    pub const fn is_determined(self) -> bool {
        self.0.len() == 1
    }

    /// Pin the position to `letter` unless it is already determined
    ///
    /// Returns whether the set changed.
    pub fn restrict_to(&mut self, letter: Letter) -> bool {
        if self.is_determined() {
            return false;
        }
        self.0 = LetterSet::single(letter);
        true
    }

    pub fn exclude(&mut self, letter: Letter) -> ExclusionOutcome {
        if !self.0.contains(letter) {
            return ExclusionOutcome::NotPresent;
        }
        if self.is_determined() {
            return ExclusionOutcome::Skipped;
        }
        self.0.remove(letter);
        ExclusionOutcome::Removed
    }
}

impl Default for PositionConstraint {
    fn default() -> Self {
        Self::full()
    }
}

/// Per-position admissible letters plus the globally required letters
///
/// Owned by a single solving session and updated once per round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstraintModel {
    positions: [PositionConstraint; WORD_LENGTH],
    required: LetterSet,
}

impl ConstraintModel {
    /// Fresh model: every letter admissible everywhere, nothing required
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constraint at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn position(&self, position: usize) -> PositionConstraint {
        self.positions[position]
    }

    /// Letters that must appear somewhere in the answer
    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// Mark a position as known: its set becomes `{letter}`
    ///
    /// A position that already holds a single letter is left as is.
    ///
    /// # Panics
    /// Panics if position >= 5
    pub fn restrict_to_full(&mut self, position: usize, letter: Letter) -> bool {
        self.positions[position].restrict_to(letter)
    }

    /// Remove `letter` from one position, unless it is the last one left
    ///
    /// # Panics
    /// Panics if position >= 5
    pub fn exclude_from_position(&mut self, position: usize, letter: Letter) -> ExclusionOutcome {
        self.positions[position].exclude(letter)
    }

    /// Remove `letter` from every position
    ///
    /// Returns the positions where the removal was skipped. The required set
    /// is left as is.
    pub fn exclude_everywhere(&mut self, letter: Letter) -> Vec<SkippedExclusion> {
        self.positions
            .iter_mut()
            .enumerate()
            .filter_map(|(position, constraint)| {
                (constraint.exclude(letter) == ExclusionOutcome::Skipped)
                    .then_some(SkippedExclusion { position, letter })
            })
            .collect()
    }

    pub fn add_required(&mut self, letter: Letter) {
        self.required.insert(letter);
    }

    /// Apply one round of feedback in position order
    ///
    /// - correct position: pin the position to the letter
    /// - present elsewhere: require the letter, exclude it here
    /// - absent: exclude the letter from every position
    ///
    /// Returns every exclusion skipped to keep a position non-empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{ConstraintModel, GuessFeedback};
    ///
    /// let mut model = ConstraintModel::new();
    /// let skipped = model.apply_feedback(&GuessFeedback::parse("crane", "__a*_").unwrap());
    ///
    /// assert!(skipped.is_empty());
    /// assert_eq!(model.required().to_string(), "N");
    /// assert_eq!(model.position(2).letters().to_string(), "A");
    /// ```
    pub fn apply_feedback(&mut self, feedback: &GuessFeedback) -> Vec<SkippedExclusion> {
        let mut skipped = Vec::new();

        for (position, &(letter, mark)) in feedback.entries().iter().enumerate() {
            match mark {
                FeedbackMark::CorrectPosition => {
                    self.restrict_to_full(position, letter);
                }
                FeedbackMark::PresentElsewhere => {
                    self.add_required(letter);
                    if self.exclude_from_position(position, letter) == ExclusionOutcome::Skipped {
                        skipped.push(SkippedExclusion { position, letter });
                    }
                }
                FeedbackMark::Absent => {
                    skipped.extend(self.exclude_everywhere(letter));
                }
            }
        }

        skipped
    }

    /// Snapshot of the position sets for matching and display
    #[must_use]
    pub fn to_pattern(&self) -> Pattern {
        Pattern::new(self.positions.map(PositionConstraint::letters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn feedback(guess: &str, marks: &str) -> GuessFeedback {
        GuessFeedback::parse(guess, marks).unwrap()
    }

    fn full_without(letters: &str) -> LetterSet {
        let mut set = LetterSet::FULL;
        for ch in letters.chars() {
            set.remove(letter(ch));
        }
        set
    }

    #[test]
    fn new_model_is_unconstrained() {
        let model = ConstraintModel::new();
        assert_eq!(model.to_pattern(), Pattern::ANY);
        assert!(model.required().is_empty());
    }

    #[test]
    fn restrict_to_full_pins_position() {
        let mut model = ConstraintModel::new();
        assert!(model.restrict_to_full(2, letter('a')));

        assert_eq!(model.position(2).letters(), LetterSet::single(letter('a')));
        assert_eq!(model.position(1).letters(), LetterSet::FULL);
    }

    #[test]
    fn restrict_to_full_is_noop_once_determined() {
        let mut model = ConstraintModel::new();
        model.restrict_to_full(0, letter('s'));

        assert!(!model.restrict_to_full(0, letter('s')));
        assert!(!model.restrict_to_full(0, letter('t')));
        assert_eq!(model.position(0).letters(), LetterSet::single(letter('s')));
    }

    #[test]
    fn exclude_from_position_outcomes() {
        let mut model = ConstraintModel::new();

        assert_eq!(
            model.exclude_from_position(1, letter('r')),
            ExclusionOutcome::Removed
        );
        assert_eq!(
            model.exclude_from_position(1, letter('r')),
            ExclusionOutcome::NotPresent
        );
        assert_eq!(model.position(1).letters(), full_without("R"));
    }

    #[test]
    fn exclude_never_empties_a_position() {
        let mut model = ConstraintModel::new();
        model.restrict_to_full(4, letter('e'));

        assert_eq!(
            model.exclude_from_position(4, letter('e')),
            ExclusionOutcome::Skipped
        );
        assert_eq!(model.position(4).letters(), LetterSet::single(letter('e')));
    }

    #[test]
    fn singleton_is_stable_under_any_exclusion() {
        let mut model = ConstraintModel::new();
        model.restrict_to_full(3, letter('l'));

        for ch in 'A'..='Z' {
            model.exclude_from_position(3, letter(ch));
            model.exclude_everywhere(letter(ch));
        }
        assert_eq!(model.position(3).letters(), LetterSet::single(letter('l')));
    }

    #[test]
    fn exclude_everywhere_reports_skipped_positions() {
        let mut model = ConstraintModel::new();
        model.restrict_to_full(1, letter('p'));

        let skipped = model.exclude_everywhere(letter('p'));

        assert_eq!(
            skipped,
            [SkippedExclusion {
                position: 1,
                letter: letter('p')
            }]
        );
        for position in [0, 2, 3, 4] {
            assert!(!model.position(position).letters().contains(letter('p')));
        }
    }

    #[test]
    fn absent_does_not_clear_required() {
        let mut model = ConstraintModel::new();
        model.add_required(letter('e'));
        model.exclude_everywhere(letter('e'));

        assert!(model.required().contains(letter('e')));
    }

    #[test]
    fn apply_feedback_apple_scenario() {
        let mut model = ConstraintModel::new();
        let skipped = model.apply_feedback(&feedback("APPLE", "AP_L*"));

        assert_eq!(model.position(0).letters(), LetterSet::single(letter('a')));
        assert_eq!(model.position(1).letters(), LetterSet::single(letter('p')));
        assert_eq!(model.position(2).letters(), full_without("P"));
        assert_eq!(model.position(3).letters(), LetterSet::single(letter('l')));
        // Absent P is excluded from every undetermined position, including 4
        assert_eq!(model.position(4).letters(), full_without("EP"));
        assert_eq!(model.required(), LetterSet::single(letter('e')));

        // Only the pinned P at position 1 resisted the exclusion
        assert_eq!(
            skipped,
            [SkippedExclusion {
                position: 1,
                letter: letter('p')
            }]
        );
    }

    #[test]
    fn to_pattern_mirrors_each_position() {
        let mut model = ConstraintModel::new();
        model.apply_feedback(&feedback("APPLE", "AP_L*"));

        let pattern = model.to_pattern();

        for position in 0..WORD_LENGTH {
            assert_eq!(pattern.position(position), model.position(position).letters());
        }
        assert_eq!(pattern.position(4), full_without("EP"));
    }

    #[test]
    fn duplicate_letter_marked_present_and_absent() {
        // Guess SPEED against a word with a single E elsewhere
        let mut model = ConstraintModel::new();
        model.apply_feedback(&feedback("speed", "__*__"));

        assert!(model.required().contains(letter('e')));
        for position in 0..WORD_LENGTH {
            assert!(!model.position(position).letters().contains(letter('e')));
        }
    }

    #[test]
    fn required_letters_only_grow() {
        let mut model = ConstraintModel::new();
        model.apply_feedback(&feedback("crane", "_*___"));
        let after_first = model.required();

        model.apply_feedback(&feedback("tours", "__*__"));
        model.apply_feedback(&feedback("rrrrr", "_____"));

        assert!(model.required().is_superset(after_first));
        assert_eq!(model.required().to_string(), "RU");
    }

    #[test]
    fn mark_order_within_round_does_not_matter() {
        let mut forward = ConstraintModel::new();
        forward.apply_feedback(&feedback("crane", "c*_n_"));

        let mut by_hand = ConstraintModel::new();
        by_hand.exclude_everywhere(letter('e'));
        by_hand.restrict_to_full(3, letter('n'));
        by_hand.exclude_everywhere(letter('a'));
        by_hand.add_required(letter('r'));
        by_hand.exclude_from_position(1, letter('r'));
        by_hand.restrict_to_full(0, letter('c'));

        assert_eq!(forward, by_hand);
    }
}
