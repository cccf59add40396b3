//! Guess feedback
//!
//! One round of input is a guess plus a mark for each of its letters. The raw
//! text form is `GUESS MARKS` where each mark is one of:
//! - `_` for a letter that is absent from the answer
//! - `*` for a letter that is present elsewhere
//! - the guessed letter itself for a letter in the correct position
//!
//! A line holding only the guess, or marks identical to the guess, means the
//! puzzle is solved.

use super::letter::Letter;
use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;
use thiserror::Error;

/// Evaluation of one guessed letter at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackMark {
    Absent,
    PresentElsewhere,
    CorrectPosition,
}

impl FeedbackMark {
    /// Raw input character for this mark; `letter` is echoed for a correct mark
    #[must_use]
    pub const fn symbol(self, letter: Letter) -> char {
        match self {
            Self::Absent => '_',
            Self::PresentElsewhere => '*',
            Self::CorrectPosition => letter.to_char(),
        }
    }
}

/// Error type for malformed round input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("No input: expected a guess followed by its feedback")]
    Empty,
    #[error("Expected 'GUESS FEEDBACK', got {0} tokens")]
    TooManyTokens(usize),
    #[error("Invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
    #[error("Feedback must be exactly {WORD_LENGTH} marks, got {0}")]
    InvalidLength(usize),
    #[error("Invalid mark '{mark}' at position {position}: use '_', '*' or the guessed letter")]
    InvalidMark { position: usize, mark: char },
    #[error("Mark '{found}' at position {position} does not match guessed letter '{expected}'")]
    LetterMismatch {
        position: usize,
        expected: char,
        found: char,
    },
}

/// Feedback for one full guess: a (letter, mark) pair per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessFeedback {
    entries: [(Letter, FeedbackMark); WORD_LENGTH],
}

impl GuessFeedback {
    /// Pair a guessed word with its marks
    #[must_use]
    pub fn from_word(guess: &Word, marks: [FeedbackMark; WORD_LENGTH]) -> Self {
        Self {
            entries: std::array::from_fn(|position| (guess.letter_at(position), marks[position])),
        }
    }

    /// Parse a guess and its raw marks
    ///
    /// # Errors
    /// Returns `FeedbackError` if the guess is not a valid word, the marks are
    /// not exactly 5 characters, or a mark is neither `_`, `*` nor the letter
    /// guessed at that position.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{FeedbackMark, GuessFeedback};
    ///
    /// let feedback = GuessFeedback::parse("apple", "ap_l*").unwrap();
    /// assert_eq!(feedback.entries()[2].1, FeedbackMark::Absent);
    /// assert_eq!(feedback.entries()[4].1, FeedbackMark::PresentElsewhere);
    /// ```
    pub fn parse(guess: &str, marks: &str) -> Result<Self, FeedbackError> {
        let guess = Word::new(guess)?;

        let mark_chars: Vec<char> = marks.chars().collect();
        if mark_chars.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(mark_chars.len()));
        }

        let mut parsed = [FeedbackMark::Absent; WORD_LENGTH];
        for (position, (&mark, slot)) in mark_chars.iter().zip(parsed.iter_mut()).enumerate() {
            let letter = guess.letter_at(position);
            *slot = match mark {
                '_' => FeedbackMark::Absent,
                '*' => FeedbackMark::PresentElsewhere,
                c if Letter::from_char(c) == Some(letter) => FeedbackMark::CorrectPosition,
                c if c.is_ascii_alphabetic() => {
                    return Err(FeedbackError::LetterMismatch {
                        position,
                        expected: letter.to_char(),
                        found: c,
                    });
                }
                c => return Err(FeedbackError::InvalidMark { position, mark: c }),
            };
        }

        Ok(Self::from_word(&guess, parsed))
    }

    #[inline]
    #[must_use]
    pub const fn entries(&self) -> &[(Letter, FeedbackMark); WORD_LENGTH] {
        &self.entries
    }

    /// Whether every position is marked correct
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.entries
            .iter()
            .all(|&(_, mark)| mark == FeedbackMark::CorrectPosition)
    }

    /// The guessed letters as a string
    #[must_use]
    pub fn guess_text(&self) -> String {
        self.entries.iter().map(|&(letter, _)| letter.to_char()).collect()
    }

    /// The marks in raw input form, e.g. `AP_L*`
    #[must_use]
    pub fn marks_text(&self) -> String {
        self.entries
            .iter()
            .map(|&(letter, mark)| mark.symbol(letter))
            .collect()
    }
}

impl fmt::Display for GuessFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess_text(), self.marks_text())
    }
}

/// One round of driver input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundInput {
    /// The player reports the guess was the answer
    Solved,
    Feedback(GuessFeedback),
}

impl RoundInput {
    /// Parse a raw input line of the form `GUESS FEEDBACK`
    ///
    /// A lone guess, or feedback identical to the guess, is the solved
    /// sentinel.
    ///
    /// # Errors
    /// Returns `FeedbackError` for a blank line, extra tokens, or malformed
    /// guess/feedback.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::RoundInput;
    ///
    /// assert_eq!(RoundInput::parse("crane crane").unwrap(), RoundInput::Solved);
    /// assert_eq!(RoundInput::parse("crane").unwrap(), RoundInput::Solved);
    /// assert!(matches!(
    ///     RoundInput::parse("crane __a*_").unwrap(),
    ///     RoundInput::Feedback(_)
    /// ));
    /// ```
    pub fn parse(line: &str) -> Result<Self, FeedbackError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => Err(FeedbackError::Empty),
            [_guess] => Ok(Self::Solved),
            [guess, marks] if guess.eq_ignore_ascii_case(marks) => Ok(Self::Solved),
            [guess, marks] => GuessFeedback::parse(guess, marks).map(Self::Feedback),
            _ => Err(FeedbackError::TooManyTokens(tokens.len())),
        }
    }
}
