//! Wordle Narrower
//!
//! An interactive Wordle assistant: feed it each guess and the puzzle's
//! feedback, and it narrows the dictionary down to the words still possible.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_narrow::core::{RoundInput, Word};
//! use wordle_narrow::solver::Session;
//!
//! let words = ["crane", "trace", "react", "slate"].map(|w| Word::new(w).unwrap()).to_vec();
//! let mut session = Session::new(words);
//!
//! // '_' absent, '*' present elsewhere, the letter itself when correct
//! let report = session.submit(&RoundInput::parse("slate __a**").unwrap()).unwrap();
//! println!("{} -> {:?}", report.pattern, report.candidates);
//! ```

// Core domain types
pub mod core;

// Narrowing engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log subscriber setup
pub mod logging;
