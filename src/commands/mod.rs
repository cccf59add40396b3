//! Command implementations

pub mod filter;
pub mod simple;

pub use filter::run_filter;
pub use simple::{SimpleConfig, run_session, run_simple};
