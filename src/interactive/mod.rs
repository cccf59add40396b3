//! Interactive TUI mode

mod app;
mod rendering;

pub use app::{App, HistoryEntry, Message, MessageStyle, run_tui};
