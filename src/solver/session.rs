//! Round-by-round solving session
//!
//! A session owns the constraint model and the candidate collection for one
//! run and moves through at most six rounds:
//!
//! ```text
//! InProgress(1) -> InProgress(2) -> ... -> InProgress(6) -> Exhausted
//!        \______________\___________________\____________-> Solved
//! ```
//!
//! Both `Solved` and `Exhausted` are terminal.

use super::filter::filter_candidates;
use crate::core::{
    ConstraintModel, GuessFeedback, LetterSet, Pattern, RoundInput, SkippedExclusion, Word,
};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Number of rounds in one run
pub const MAX_ROUNDS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for feedback for `round` (1-6)
    InProgress { round: u8 },
    Solved,
    /// All rounds used without solving
    Exhausted,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress { round } => write!(f, "round {round} of {MAX_ROUNDS}"),
            Self::Solved => write!(f, "solved"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session is already {0}; start a new run")]
    Finished(SessionState),
}

/// Outcome of one submitted round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport<'a> {
    /// Round that was just played (1-6)
    pub round: u8,
    /// State after the round
    pub state: SessionState,
    pub candidates_before: usize,
    /// Remaining candidates, sorted
    pub candidates: &'a [Word],
    pub pattern: Pattern,
    pub required: LetterSet,
    /// Exclusions dropped because the feedback contradicted earlier rounds
    pub skipped: Vec<SkippedExclusion>,
}

impl RoundReport<'_> {
    #[must_use]
    pub const fn candidates_after(&self) -> usize {
        self.candidates.len()
    }
}

/// One solving run
#[derive(Debug, Clone)]
pub struct Session {
    model: ConstraintModel,
    candidates: Vec<Word>,
    state: SessionState,
}

impl Session {
    /// Start a run over the given initial candidates
    #[must_use]
    pub fn new(candidates: Vec<Word>) -> Self {
        Self {
            model: ConstraintModel::new(),
            candidates,
            state: SessionState::InProgress { round: 1 },
        }
    }

    #[inline]
    #[must_use]
    pub const fn model(&self) -> &ConstraintModel {
        &self.model
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Round awaiting feedback, if the run is still going
    #[must_use]
    pub const fn current_round(&self) -> Option<u8> {
        match self.state {
            SessionState::InProgress { round } => Some(round),
            _ => None,
        }
    }

    /// Submit one round of driver input
    ///
    /// The solved sentinel, or feedback marking every letter correct, ends the
    /// run as `Solved` without touching the candidates. Otherwise the
    /// feedback narrows the model and the candidates are re-filtered; after
    /// the sixth round the run ends as `Exhausted`.
    ///
    /// # Errors
    /// Returns `SessionError::Finished` if the run already ended.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{RoundInput, Word};
    /// use wordle_narrow::solver::{Session, SessionState};
    ///
    /// let words = ["crane", "trace", "slate"].map(|w| Word::new(w).unwrap()).to_vec();
    /// let mut session = Session::new(words);
    ///
    /// let report = session.submit(&RoundInput::parse("crane *ra_e").unwrap()).unwrap();
    /// assert_eq!(report.candidates_after(), 1);
    /// assert_eq!(report.state, SessionState::InProgress { round: 2 });
    ///
    /// let report = session.submit(&RoundInput::parse("trace trace").unwrap()).unwrap();
    /// assert_eq!(report.state, SessionState::Solved);
    /// ```
    pub fn submit(&mut self, input: &RoundInput) -> Result<RoundReport<'_>, SessionError> {
        let SessionState::InProgress { round } = self.state else {
            return Err(SessionError::Finished(self.state));
        };

        match input {
            RoundInput::Feedback(feedback) if !feedback.is_all_correct() => {
                Ok(self.narrow(round, feedback))
            }
            _ => Ok(self.solve(round)),
        }
    }

    fn solve(&mut self, round: u8) -> RoundReport<'_> {
        self.state = SessionState::Solved;
        info!(round, candidates = self.candidates.len(), "puzzle solved");
        self.report(round, self.candidates.len(), Vec::new())
    }

    fn narrow(&mut self, round: u8, feedback: &GuessFeedback) -> RoundReport<'_> {
        let candidates_before = self.candidates.len();

        let skipped = self.model.apply_feedback(feedback);
        for exclusion in &skipped {
            warn!(
                round,
                position = exclusion.position + 1,
                letter = %exclusion.letter,
                "contradictory feedback: kept the last admissible letter"
            );
        }

        let pattern = self.model.to_pattern();
        debug!(
            round,
            feedback = %feedback,
            pattern = %pattern,
            required = %self.model.required(),
            "constraints updated"
        );

        self.candidates = filter_candidates(&self.candidates, &self.model);
        self.state = if round >= MAX_ROUNDS {
            SessionState::Exhausted
        } else {
            SessionState::InProgress { round: round + 1 }
        };

        info!(
            round,
            before = candidates_before,
            after = self.candidates.len(),
            state = %self.state,
            "round complete"
        );

        self.report(round, candidates_before, skipped)
    }

    fn report(
        &self,
        round: u8,
        candidates_before: usize,
        skipped: Vec<SkippedExclusion>,
    ) -> RoundReport<'_> {
        RoundReport {
            round,
            state: self.state,
            candidates_before,
            candidates: &self.candidates,
            pattern: self.model.to_pattern(),
            required: self.model.required(),
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    fn input(line: &str) -> RoundInput {
        RoundInput::parse(line).unwrap()
    }

    #[test]
    fn new_session_starts_at_round_one() {
        let session = Session::new(words(&["crane"]));
        assert_eq!(session.state(), SessionState::InProgress { round: 1 });
        assert_eq!(session.current_round(), Some(1));
        assert_eq!(session.model(), &ConstraintModel::new());
    }

    #[test]
    fn feedback_advances_round_and_narrows() {
        let mut session = Session::new(words(&["slate", "crane", "trace", "react"]));

        let report = session.submit(&input("slate __a**")).unwrap();

        assert_eq!(report.round, 1);
        assert_eq!(report.state, SessionState::InProgress { round: 2 });
        assert_eq!(report.candidates_before, 4);
        assert_eq!(report.candidates, words(&["react"]).as_slice());
        assert_eq!(report.required.to_string(), "ET");
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn solved_sentinel_leaves_candidates_unchanged() {
        let mut session = Session::new(words(&["slate", "crane", "trace", "react"]));
        session.submit(&input("slate __a__")).unwrap();
        let before = session.candidates().to_vec();
        let model_before = session.model().clone();

        let report = session.submit(&input("crane")).unwrap();

        assert_eq!(report.state, SessionState::Solved);
        assert_eq!(report.round, 2);
        assert_eq!(report.candidates, before.as_slice());
        assert_eq!(session.model(), &model_before);
    }

    #[test]
    fn all_correct_feedback_solves_without_filtering() {
        let mut session = Session::new(words(&["slate", "crane"]));

        let feedback = GuessFeedback::parse("zzzzz", "ZZZZZ").unwrap();
        let report = session.submit(&RoundInput::Feedback(feedback)).unwrap();

        assert_eq!(report.state, SessionState::Solved);
        assert_eq!(report.candidates_after(), 2);
    }

    #[test]
    fn six_rounds_without_solving_exhausts() {
        let mut session = Session::new(words(&["crane", "slate", "trace", "grate"]));

        for round in 1..=MAX_ROUNDS {
            let report = session.submit(&input("mummy _____")).unwrap();
            assert_eq!(report.round, round);
        }

        assert_eq!(session.state(), SessionState::Exhausted);
        assert_eq!(session.candidates().len(), 4);
    }

    #[test]
    fn exhausted_even_with_no_candidates_left() {
        let mut session = Session::new(words(&["crane", "slate"]));
        let report = session.submit(&input("crane _____")).unwrap();
        assert_eq!(report.candidates_after(), 0);

        for _ in 2..MAX_ROUNDS {
            session.submit(&input("built _____")).unwrap();
        }
        let last = session.submit(&input("dowdy _____")).unwrap();

        assert_eq!(last.round, MAX_ROUNDS);
        assert_eq!(last.state, SessionState::Exhausted);
        assert!(last.candidates.is_empty());
    }

    fn session_at_final_round() -> Session {
        let mut session = Session::new(words(&["crane", "slate", "trace", "grate"]));
        for _ in 1..MAX_ROUNDS {
            session.submit(&input("mummy _____")).unwrap();
        }
        assert_eq!(session.current_round(), Some(MAX_ROUNDS));
        session
    }

    #[test]
    fn solved_on_final_round_is_not_exhausted() {
        let mut session = session_at_final_round();
        let before = session.candidates().to_vec();

        let report = session.submit(&input("crane crane")).unwrap();

        assert_eq!(report.round, MAX_ROUNDS);
        assert_eq!(report.state, SessionState::Solved);
        assert_eq!(report.candidates, before.as_slice());
        assert_eq!(session.state(), SessionState::Solved);

        let mut session = session_at_final_round();
        let feedback = GuessFeedback::parse("crane", "CRANE").unwrap();

        let report = session.submit(&RoundInput::Feedback(feedback)).unwrap();

        assert_eq!(report.state, SessionState::Solved);
        assert_eq!(report.candidates, before.as_slice());
    }

    #[test]
    fn terminal_sessions_reject_input() {
        let mut solved = Session::new(words(&["crane"]));
        solved.submit(&RoundInput::Solved).unwrap();
        assert_eq!(
            solved.submit(&input("crane _____")).unwrap_err(),
            SessionError::Finished(SessionState::Solved)
        );

        let mut exhausted = Session::new(words(&["crane"]));
        for _ in 0..MAX_ROUNDS {
            exhausted.submit(&input("mummy _____")).unwrap();
        }
        assert_eq!(
            exhausted.submit(&RoundInput::Solved).unwrap_err(),
            SessionError::Finished(SessionState::Exhausted)
        );
    }

    #[test]
    fn contradictions_are_reported_not_fatal() {
        let mut session = Session::new(words(&["apple", "ample"]));
        session.submit(&input("apple a____")).unwrap();

        let report = session.submit(&input("abbey _____")).unwrap();

        assert_eq!(
            report.skipped,
            [SkippedExclusion {
                position: 0,
                letter: Letter::from_char('a').unwrap()
            }]
        );
        assert_eq!(report.state, SessionState::InProgress { round: 3 });
        assert!(report.pattern.position(0).contains(Letter::from_char('a').unwrap()));
    }

    #[test]
    fn candidates_shrink_monotonically_across_rounds() {
        let mut session = Session::new(words(&[
            "crane", "trace", "react", "cater", "slate", "grate", "irate", "orate", "prate",
        ]));
        let mut previous = session.candidates().len();

        for line in ["slate __ate", "crane _ra_e", "prate _rate"] {
            let report = session.submit(&input(line)).unwrap();
            assert!(report.candidates_after() <= previous);
            previous = report.candidates_after();
        }

        assert_eq!(session.candidates(), words(&["grate", "irate", "orate"]).as_slice());
    }
}
