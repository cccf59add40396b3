//! Wordle Narrower - CLI
//!
//! Narrows Wordle candidates from guess feedback, with a line-based mode, a
//! TUI mode and a one-shot filter command.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_narrow::{
    commands::{SimpleConfig, run_filter, run_simple},
    interactive::{App, run_tui},
    logging,
    wordlists::{Dictionary, DictionaryConfig},
};

#[derive(Parser)]
#[command(
    name = "wordle_narrow",
    about = "Narrow Wordle candidates from the feedback of each guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Vocabulary file, one word per line (default: embedded list)
    #[arg(long, global = true, value_name = "PATH")]
    allowed: Option<PathBuf>,

    /// Prior answer records 'WORD [NUMBER] MM/DD/YY' (default: embedded list)
    #[arg(long, global = true, value_name = "PATH")]
    answers: Option<PathBuf>,

    /// Only exclude prior answers dated before this day (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE", value_parser = parse_date)]
    before: Option<NaiveDate>,

    /// Words per line when listing candidates
    #[arg(short, long, global = true, default_value = "5")]
    columns: usize,

    /// Show the per-position constraints after each round
    #[arg(long, global = true)]
    constraints: bool,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based interactive mode (default)
    Simple,

    /// Interactive TUI mode
    Play,

    /// Apply rounds given as arguments and print the result
    Filter {
        /// Alternating guesses and feedback, e.g. `crane _r*__ slate ___a_`
        #[arg(required = true, num_args = 1.., value_name = "GUESS FEEDBACK")]
        rounds: Vec<String>,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{value}': {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);
    logging::init(cli.verbose, matches!(command, Commands::Play));

    let config = DictionaryConfig {
        allowed_path: cli.allowed,
        answers_path: cli.answers,
        cutoff: cli.before,
    };
    let dictionary = Dictionary::load(&config).context("while loading word lists")?;
    let candidates = dictionary.initial_candidates();

    match command {
        Commands::Simple => {
            let simple = SimpleConfig {
                columns: cli.columns,
                show_constraints: cli.constraints,
            };
            run_simple(candidates, &simple)?;
            Ok(())
        }
        Commands::Play => run_tui(App::new(candidates)),
        Commands::Filter { rounds } => {
            run_filter(candidates, &rounds, cli.columns, cli.constraints)?;
            Ok(())
        }
    }
}
