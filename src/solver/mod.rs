//! Candidate narrowing engine
//!
//! Filtering of the candidate collection and the round-by-round session that
//! drives it.

mod filter;
mod session;

pub use filter::{filter_candidates, is_consistent};
pub use session::{MAX_ROUNDS, RoundReport, Session, SessionError, SessionState};
