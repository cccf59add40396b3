//! Display functions for round results

use super::formatters::{describe_pattern, format_word_grid};
use crate::core::SkippedExclusion;
use crate::solver::{MAX_ROUNDS, RoundReport, SessionState};
use colored::Colorize;

/// Print the usage banner for the line-based driver
pub fn print_banner(candidates: usize) {
    println!("\n{}", "═".repeat(62).cyan());
    println!(
        "{}",
        "              Wordle Narrower - Interactive Mode"
            .bright_cyan()
            .bold()
    );
    println!("{}\n", "═".repeat(62).cyan());

    println!("Enter each guess followed by its feedback, e.g. 'crane _r*__':");
    println!("  - '_' letter is not in the word");
    println!("  - '*' letter is in the word, in another spot");
    println!("  - the letter itself when it is in the right spot");
    println!("Enter the guess alone (or twice) once it was the answer.\n");
    println!(
        "Starting with {} candidates, {MAX_ROUNDS} rounds.\n",
        candidates.to_string().bright_yellow()
    );
}

/// Prompt shown before reading a round, e.g. `3 > `
#[must_use]
pub fn round_prompt(round: u8) -> String {
    format!("{round} > ")
}

/// Print the outcome of one round
pub fn print_round_report(report: &RoundReport<'_>, columns: usize) {
    if report.state == SessionState::Solved {
        print_solved(report.round);
        return;
    }

    print_skipped(&report.skipped);

    println!("{}", report.pattern.to_string().bright_black());
    if !report.required.is_empty() {
        println!("{} {}", "Required:".bright_black(), report.required);
    }

    println!("{}", "--- Remaining words ---".cyan());
    if !report.candidates.is_empty() {
        println!("{}", format_word_grid(report.candidates, columns));
    }
    println!(
        "{}",
        format!("=== Count :: {}", report.candidates_after())
            .bright_yellow()
            .bold()
    );

    if report.candidates.is_empty() {
        println!(
            "{}",
            "No candidates remain - the feedback may be inconsistent.".red()
        );
    }

    if report.state == SessionState::Exhausted {
        print_exhausted(report.candidates_after());
    }
}

/// Print the per-position constraint summary
pub fn print_constraints(report: &RoundReport<'_>) {
    for line in describe_pattern(&report.pattern) {
        println!("  {line}");
    }
}

/// Note exclusions skipped to keep a position non-empty
pub fn print_skipped(skipped: &[SkippedExclusion]) {
    for exclusion in skipped {
        println!(
            "{}",
            format!(
                "Note: kept {} at position {} - it was the only letter left there",
                exclusion.letter,
                exclusion.position + 1
            )
            .yellow()
        );
    }
}

fn print_solved(round: u8) {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "           🎉  C O N G R A T U L A T I O N S !  🎉"
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "\n  Solved in {} {}\n",
        round.to_string().bright_cyan().bold(),
        if round == 1 { "guess" } else { "guesses" }
    );
}

fn print_exhausted(remaining: usize) {
    println!(
        "\n{}",
        format!("All {MAX_ROUNDS} rounds used; {remaining} candidates were still possible.")
            .red()
            .bold()
    );
}
