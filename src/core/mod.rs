//! Core domain types for Wordle narrowing
//!
//! This module contains the letter, word, feedback and constraint types.
//! Everything here is pure and synchronous; I/O lives in the drivers.

mod constraints;
mod feedback;
mod letter;
mod pattern;
mod word;

pub use constraints::{ConstraintModel, ExclusionOutcome, PositionConstraint, SkippedExclusion};
pub use feedback::{FeedbackError, FeedbackMark, GuessFeedback, RoundInput};
pub use letter::{ALPHABET_SIZE, Letter, LetterSet};
pub use pattern::Pattern;
pub use word::{WORD_LENGTH, Word, WordError};
