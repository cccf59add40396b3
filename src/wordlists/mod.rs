//! Word lists for Wordle narrowing
//!
//! Provides the embedded vocabulary and prior-answer records, plus the
//! `Dictionary` that turns them into the initial candidate collection.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWER_RECORDS, ANSWER_RECORDS_COUNT};
pub use loader::DictionaryError;

use crate::core::Word;
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use tracing::info;

/// Where to load word lists from
///
/// `None` paths fall back to the embedded lists.
#[derive(Debug, Clone, Default)]
pub struct DictionaryConfig {
    pub allowed_path: Option<PathBuf>,
    pub answers_path: Option<PathBuf>,
    /// Only answers dated strictly before this are excluded; `None` excludes all
    pub cutoff: Option<NaiveDate>,
}

/// Loaded vocabulary and prior answers
#[derive(Debug, Clone)]
pub struct Dictionary {
    vocabulary: Vec<Word>,
    prior_answers: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from already loaded collections
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::EmptyVocabulary` if `vocabulary` is empty.
    pub fn new(
        vocabulary: Vec<Word>,
        prior_answers: FxHashSet<Word>,
    ) -> Result<Self, DictionaryError> {
        if vocabulary.is_empty() {
            return Err(DictionaryError::EmptyVocabulary);
        }
        Ok(Self {
            vocabulary,
            prior_answers,
        })
    }

    /// Load the embedded lists
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if an embedded answer record is malformed.
    pub fn embedded(cutoff: Option<NaiveDate>) -> Result<Self, DictionaryError> {
        Self::load(&DictionaryConfig {
            cutoff,
            ..DictionaryConfig::default()
        })
    }

    /// Load word lists per `config`
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if a file cannot be read, an answer record
    /// is malformed, or the vocabulary ends up empty.
    pub fn load(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
        let vocabulary = match &config.allowed_path {
            Some(path) => loader::load_vocabulary(path)?,
            None => loader::parse_vocabulary(ALLOWED.iter().copied()),
        };

        let prior_answers = match &config.answers_path {
            Some(path) => loader::load_prior_answers(path, config.cutoff)?,
            None => loader::parse_prior_answers(ANSWER_RECORDS.iter().copied(), config.cutoff)?,
        };

        info!(
            vocabulary = vocabulary.len(),
            prior_answers = prior_answers.len(),
            cutoff = ?config.cutoff,
            "dictionary loaded"
        );

        Self::new(vocabulary, prior_answers)
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    #[must_use]
    pub const fn prior_answers(&self) -> &FxHashSet<Word> {
        &self.prior_answers
    }

    /// Vocabulary minus prior answers, in vocabulary order
    ///
    /// # Examples
    /// ```
    /// use rustc_hash::FxHashSet;
    /// use wordle_narrow::core::Word;
    /// use wordle_narrow::wordlists::Dictionary;
    ///
    /// let vocabulary = ["crane", "cigar", "slate"].map(|w| Word::new(w).unwrap()).to_vec();
    /// let answers: FxHashSet<Word> = [Word::new("cigar").unwrap()].into_iter().collect();
    ///
    /// let dictionary = Dictionary::new(vocabulary, answers).unwrap();
    /// let candidates = dictionary.initial_candidates();
    /// let texts: Vec<&str> = candidates.iter().map(Word::text).collect();
    /// assert_eq!(texts, ["CRANE", "SLATE"]);
    /// ```
    #[must_use]
    pub fn initial_candidates(&self) -> Vec<Word> {
        self.vocabulary
            .iter()
            .filter(|word| !self.prior_answers.contains(*word))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn answer_records_count_matches_const() {
        assert_eq!(ANSWER_RECORDS.len(), ANSWER_RECORDS_COUNT);
    }

    #[test]
    fn allowed_are_valid_words() {
        for &word in ALLOWED {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_alphabetic()),
                "Word '{word}' contains non-letter chars"
            );
        }
    }

    #[test]
    fn allowed_entries_are_unique() {
        let unique: FxHashSet<&str> = ALLOWED.iter().copied().collect();
        assert_eq!(unique.len(), ALLOWED.len());
    }

    #[test]
    fn embedded_answers_all_in_allowed() {
        let dictionary = Dictionary::embedded(None).unwrap();
        let allowed: FxHashSet<&Word> = dictionary.vocabulary().iter().collect();

        assert_eq!(dictionary.prior_answers().len(), ANSWER_RECORDS_COUNT);
        for answer in dictionary.prior_answers() {
            assert!(allowed.contains(answer), "Answer '{answer}' not in allowed list");
        }
    }

    #[test]
    fn embedded_cutoff_before_first_puzzle_excludes_nothing() {
        let cutoff = NaiveDate::from_ymd_opt(2021, 6, 1);
        let dictionary = Dictionary::embedded(cutoff).unwrap();

        assert!(dictionary.prior_answers().is_empty());
        assert_eq!(dictionary.initial_candidates().len(), ALLOWED_COUNT);
    }

    #[test]
    fn initial_candidates_exclude_prior_answers() {
        let dictionary = Dictionary::embedded(None).unwrap();
        let candidates = dictionary.initial_candidates();

        assert_eq!(candidates.len(), ALLOWED_COUNT - ANSWER_RECORDS_COUNT);
        assert!(!candidates.contains(&Word::new("cigar").unwrap()));
        assert!(candidates.iter().all(|w| w.text().len() == 5));
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let result = Dictionary::new(Vec::new(), FxHashSet::default());
        assert!(matches!(result, Err(DictionaryError::EmptyVocabulary)));
    }
}
