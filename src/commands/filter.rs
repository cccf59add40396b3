//! Non-interactive filtering
//!
//! Applies rounds given on the command line and prints each result.

use crate::core::{RoundInput, Word};
use crate::output::{print_constraints, print_round_report};
use crate::solver::{Session, SessionState};
use anyhow::{Context, Result, bail};
use colored::Colorize;

/// Run the `filter` command
///
/// `tokens` alternate guess and feedback: `crane _r*__ slate ___a_`.
///
/// # Errors
///
/// Returns an error for an odd number of tokens, a malformed round, or more
/// rounds than the session accepts.
pub fn run_filter(
    candidates: Vec<Word>,
    tokens: &[String],
    columns: usize,
    show_constraints: bool,
) -> Result<SessionState> {
    if tokens.len() % 2 != 0 {
        bail!(
            "expected GUESS FEEDBACK pairs, got {} arguments",
            tokens.len()
        );
    }

    let mut session = Session::new(candidates);

    for pair in tokens.chunks(2) {
        let line = pair.join(" ");
        let input = RoundInput::parse(&line).with_context(|| format!("invalid round '{line}'"))?;

        let report = session
            .submit(&input)
            .with_context(|| format!("cannot apply '{line}'"))?;

        println!(
            "\n{} {}",
            format!("Round {}:", report.round).bright_cyan().bold(),
            line.to_uppercase()
        );
        print_round_report(&report, columns);
        if show_constraints && !report.state.is_terminal() {
            print_constraints(&report);
        }
    }

    Ok(session.state())
}
