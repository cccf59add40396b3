//! Terminal output formatting
//!
//! Display utilities for round reports and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_constraints, print_round_report, round_prompt};
