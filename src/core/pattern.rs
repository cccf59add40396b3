//! Positional letter pattern
//!
//! A pattern is one admissible-letter set per position. A word matches when
//! each of its 5 letters is in the set for that position; there is no
//! partial or longer match. The textual form mirrors a character-class
//! pattern: `[ABC][A][...]`.

use super::letter::LetterSet;
use super::word::{WORD_LENGTH, Word};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([LetterSet; WORD_LENGTH]);

impl Pattern {
    /// Pattern that accepts every word
    pub const ANY: Self = Self([LetterSet::FULL; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(sets: [LetterSet; WORD_LENGTH]) -> Self {
        Self(sets)
    }

    /// Admissible letters at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn position(&self, position: usize) -> LetterSet {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn sets(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.0
    }

    /// Check whether every letter of `word` is admissible at its position
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{Letter, LetterSet, Pattern, Word};
    ///
    /// let mut first = LetterSet::FULL;
    /// first.remove(Letter::from_char('C').unwrap());
    /// let pattern = Pattern::new([first, LetterSet::FULL, LetterSet::FULL, LetterSet::FULL, LetterSet::FULL]);
    ///
    /// assert!(pattern.matches(&Word::new("slate").unwrap()));
    /// assert!(!pattern.matches(&Word::new("crane").unwrap()));
    /// ```
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.0
            .iter()
            .zip(word.letters())
            .all(|(set, &letter)| set.contains(letter))
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::ANY
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for set in &self.0 {
            write!(f, "[{set}]")?;
        }
        Ok(())
    }
}
