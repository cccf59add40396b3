//! Formatting utilities for terminal output

use crate::core::{FeedbackMark, GuessFeedback, LetterSet, Pattern, Word};

/// Lay words out in rows of `columns`, separated by spaces
///
/// A `columns` of 0 is treated as 1.
#[must_use]
pub fn format_word_grid(words: &[Word], columns: usize) -> String {
    words
        .chunks(columns.max(1))
        .map(|row| row.iter().map(Word::text).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format feedback as emoji tiles
#[must_use]
pub fn feedback_to_emoji(feedback: &GuessFeedback) -> String {
    feedback
        .entries()
        .iter()
        .map(|&(_, mark)| match mark {
            FeedbackMark::Absent => '⬜',
            FeedbackMark::PresentElsewhere => '🟨',
            FeedbackMark::CorrectPosition => '🟩',
        })
        .collect()
}

/// Describe one position's admissible letters
///
/// Determined positions show the letter; otherwise the excluded letters are
/// listed when most letters remain.
#[must_use]
pub fn describe_position(set: LetterSet) -> String {
    match set.len() {
        1 => format!("= {set}"),
        26 => "any".to_string(),
        n if n >= 13 => format!("not {}", set.complement()),
        _ => format!("one of {set}"),
    }
}

/// One line per position: `1: = A`, `3: not P`, ...
#[must_use]
pub fn describe_pattern(pattern: &Pattern) -> Vec<String> {
    pattern
        .sets()
        .iter()
        .enumerate()
        .map(|(position, &set)| format!("{}: {}", position + 1, describe_position(set)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn grid_wraps_at_column_count() {
        let list = words(&["aback", "abase", "abate", "abbey", "abyss", "actor", "acute"]);

        assert_eq!(
            format_word_grid(&list, 5),
            "ABACK ABASE ABATE ABBEY ABYSS\nACTOR ACUTE"
        );
        assert_eq!(format_word_grid(&list[..2], 1), "ABACK\nABASE");
    }

    #[test]
    fn grid_of_nothing_is_empty() {
        assert_eq!(format_word_grid(&[], 5), "");
        assert_eq!(format_word_grid(&words(&["crane"]), 0), "CRANE");
    }

    #[test]
    fn feedback_emoji_tiles() {
        let feedback = GuessFeedback::parse("apple", "ap_l*").unwrap();
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟩⬜🟩🟨");
    }

    #[test]
    fn describe_position_variants() {
        let letter = |c| Letter::from_char(c).unwrap();

        assert_eq!(describe_position(LetterSet::FULL), "any");
        assert_eq!(describe_position(LetterSet::single(letter('a'))), "= A");

        let mut most = LetterSet::FULL;
        most.remove(letter('p'));
        most.remove(letter('e'));
        assert_eq!(describe_position(most), "not EP");

        let few: LetterSet = [letter('x'), letter('b')].into_iter().collect();
        assert_eq!(describe_position(few), "one of BX");
    }

    #[test]
    fn describe_pattern_numbers_positions() {
        let lines = describe_pattern(&Pattern::ANY);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "1: any");
        assert_eq!(lines[4], "5: any");
    }
}
