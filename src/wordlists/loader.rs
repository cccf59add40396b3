//! Word list loading utilities
//!
//! Parses the vocabulary (one word per line) and the prior-answer records
//! (`WORD [PUZZLE_NUMBER] MM/DD/YY`) from files or embedded constants.

use crate::core::{Word, WordError};
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Date format of prior-answer records, e.g. `06/19/21`
pub const ANSWER_DATE_FORMAT: &str = "%m/%d/%y";

/// Errors while loading word lists
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Answer record on line {line} has no date: {record:?}")]
    MissingDate { line: usize, record: String },
    #[error("Answer record on line {line} has an unparseable date {value:?}: {source}")]
    InvalidDate {
        line: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Answer record on line {line} has an invalid word {record:?}: {source}")]
    InvalidAnswer {
        line: usize,
        record: String,
        #[source]
        source: WordError,
    },
    #[error("Vocabulary contains no valid words")]
    EmptyVocabulary,
}

/// Parse vocabulary lines into words, keeping source order
///
/// Blank lines are ignored; entries that are not 5 letters are skipped and
/// repeated words keep their first occurrence.
///
/// # Examples
/// ```
/// use wordle_narrow::wordlists::loader::parse_vocabulary;
///
/// let words = parse_vocabulary(["crane", "", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "CRANE");
/// ```
pub fn parse_vocabulary<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Word> {
    let mut skipped = 0usize;
    let mut seen = FxHashSet::default();

    let words: Vec<Word> = lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                skipped += 1;
                debug!(entry = line, %err, "skipping vocabulary entry");
                None
            }
        })
        .filter(|word| seen.insert(word.clone()))
        .collect();

    if skipped > 0 {
        warn!(skipped, "skipped invalid vocabulary entries");
    }

    words
}

/// Load the vocabulary from a file
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read.
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let content = read(path.as_ref())?;
    Ok(parse_vocabulary(content.lines()))
}

/// Parse prior-answer records into a set of words
///
/// With a cutoff, only records dated strictly before it are included;
/// without one every record is.
///
/// # Errors
///
/// Returns `DictionaryError` if a record has no date, an unparseable date, or
/// an invalid word.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_narrow::wordlists::loader::parse_prior_answers;
///
/// let records = ["cigar 0 06/19/21", "rebut 1 06/20/21"];
/// let cutoff = NaiveDate::from_ymd_opt(2021, 6, 20);
///
/// let answers = parse_prior_answers(records, cutoff).unwrap();
/// assert_eq!(answers.len(), 1);
/// ```
pub fn parse_prior_answers<'a>(
    records: impl IntoIterator<Item = &'a str>,
    cutoff: Option<NaiveDate>,
) -> Result<FxHashSet<Word>, DictionaryError> {
    let mut answers = FxHashSet::default();

    for (index, record) in records.into_iter().enumerate() {
        if record.trim().is_empty() {
            continue;
        }

        let (word, date) = parse_answer_record(index + 1, record)?;
        if cutoff.is_none_or(|cutoff| date < cutoff) {
            answers.insert(word);
        }
    }

    Ok(answers)
}

/// Load prior answers from a file
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read or a record is
/// malformed.
pub fn load_prior_answers<P: AsRef<Path>>(
    path: P,
    cutoff: Option<NaiveDate>,
) -> Result<FxHashSet<Word>, DictionaryError> {
    let content = read(path.as_ref())?;
    parse_prior_answers(content.lines(), cutoff)
}

/// Split a record into its word (first field) and date (last field)
fn parse_answer_record(line: usize, record: &str) -> Result<(Word, NaiveDate), DictionaryError> {
    let fields: Vec<&str> = record.split_whitespace().collect();

    let &[text, .., date_text] = fields.as_slice() else {
        return Err(DictionaryError::MissingDate {
            line,
            record: record.to_string(),
        });
    };

    let word = Word::new(text).map_err(|source| DictionaryError::InvalidAnswer {
        line,
        record: record.to_string(),
        source,
    })?;

    let date = NaiveDate::parse_from_str(date_text, ANSWER_DATE_FORMAT).map_err(|source| {
        DictionaryError::InvalidDate {
            line,
            value: date_text.to_string(),
            source,
        }
    })?;

    Ok((word, date))
}

fn read(path: &Path) -> Result<String, DictionaryError> {
    fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_vocabulary_uppercases_and_keeps_order() {
        let words = parse_vocabulary(["slate", "Crane", "irate"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        assert_eq!(texts, ["SLATE", "CRANE", "IRATE"]);
    }

    #[test]
    fn parse_vocabulary_skips_invalid() {
        let words = parse_vocabulary(["crane", "toolong", "abc", "  ", "sl4te", "slate"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        assert_eq!(texts, ["CRANE", "SLATE"]);
    }

    #[test]
    fn parse_vocabulary_drops_repeats() {
        let words = parse_vocabulary(["crane", "slate", "CRANE", "crane"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE"]);
    }

    #[test]
    fn parse_vocabulary_empty() {
        assert!(parse_vocabulary(std::iter::empty()).is_empty());
    }

    #[test]
    fn prior_answers_without_cutoff_includes_all() {
        let records = ["cigar 0 06/19/21", "rebut 1 06/20/21", "", "sissy 2 06/21/21"];
        let answers = parse_prior_answers(records, None).unwrap();

        assert_eq!(answers.len(), 3);
        assert!(answers.contains(&Word::new("SISSY").unwrap()));
    }

    #[test]
    fn prior_answers_cutoff_is_strictly_before() {
        let records = ["cigar 0 06/19/21", "rebut 1 06/20/21", "sissy 2 06/21/21"];

        let answers = parse_prior_answers(records, Some(date(2021, 6, 20))).unwrap();
        assert_eq!(answers.len(), 1);
        assert!(answers.contains(&Word::new("cigar").unwrap()));

        let none = parse_prior_answers(records, Some(date(2021, 6, 19))).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn prior_answers_puzzle_number_is_optional() {
        let answers = parse_prior_answers(["cigar 06/19/21"], None).unwrap();
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn prior_answers_bad_date_is_fatal() {
        let err = parse_prior_answers(["cigar 0 06/19/21", "rebut 1 2021-06-20"], None)
            .unwrap_err();

        assert!(matches!(
            err,
            DictionaryError::InvalidDate { line: 2, ref value, .. } if value == "2021-06-20"
        ));
    }

    #[test]
    fn prior_answers_missing_date_is_fatal() {
        let err = parse_prior_answers(["cigar"], None).unwrap_err();
        assert!(matches!(err, DictionaryError::MissingDate { line: 1, .. }));
    }

    #[test]
    fn prior_answers_invalid_word_is_fatal() {
        let err = parse_prior_answers(["cigars 0 06/19/21"], None).unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidAnswer { line: 1, .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_vocabulary("does/not/exist.txt").unwrap_err();

        assert!(matches!(err, DictionaryError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}
