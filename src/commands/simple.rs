//! Simple interactive CLI mode
//!
//! Reads one `GUESS FEEDBACK` line per round and prints the narrowed
//! candidates until the puzzle is solved or the rounds run out.

use crate::core::{RoundInput, Word};
use crate::output::{print_banner, print_constraints, print_round_report, round_prompt};
use crate::solver::{Session, SessionState};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Options for the line-based driver
#[derive(Debug, Clone)]
pub struct SimpleConfig {
    /// Words per line when printing candidates
    pub columns: usize,
    /// Print the per-position constraint summary after each round
    pub show_constraints: bool,
}

impl Default for SimpleConfig {
    fn default() -> Self {
        Self {
            columns: 5,
            show_constraints: false,
        }
    }
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple(candidates: Vec<Word>, config: &SimpleConfig) -> Result<SessionState> {
    let stdin = io::stdin();
    run_session(stdin.lock(), candidates, config)
}

/// Drive one session from any line source
///
/// Malformed lines are reported and re-prompted; end of input stops the
/// run where it is. Returns the state the session finished in.
///
/// # Errors
///
/// Returns an error if reading from `input` fails.
pub fn run_session<R: BufRead>(
    mut input: R,
    candidates: Vec<Word>,
    config: &SimpleConfig,
) -> Result<SessionState> {
    let mut session = Session::new(candidates);
    print_banner(session.candidates().len());

    while let Some(round) = session.current_round() {
        let Some(line) = read_round(&mut input, round)? else {
            println!();
            info!(round, "input closed before the run finished");
            break;
        };

        let round_input = match RoundInput::parse(&line) {
            Ok(round_input) => round_input,
            Err(err) => {
                println!("{} {err}", "❌ Invalid input:".red());
                continue;
            }
        };

        let report = session.submit(&round_input)?;
        print_round_report(&report, config.columns);
        if config.show_constraints && !report.state.is_terminal() {
            print_constraints(&report);
        }
    }

    Ok(session.state())
}

/// Prompt and read one line; `None` at end of input
fn read_round<R: BufRead>(input: &mut R, round: u8) -> Result<Option<String>> {
    print!("{}", round_prompt(round));
    io::stdout().flush().context("while flushing the prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("while reading user input")?;

    Ok((read > 0).then_some(line))
}
