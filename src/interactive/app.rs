//! TUI application state and logic

use crate::core::{RoundInput, SkippedExclusion, WORD_LENGTH, Word};
use crate::output::formatters::feedback_to_emoji;
use crate::solver::{MAX_ROUNDS, Session, SessionState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    initial_candidates: Vec<Word>,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub undo_stack: Vec<Session>,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub round: u8,
    /// Raw round text as entered, uppercased
    pub input: String,
    /// Colored tile rendering of the feedback
    pub tiles: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl App {
    #[must_use]
    pub fn new(initial_candidates: Vec<Word>) -> Self {
        let count = initial_candidates.len();

        Self {
            session: Session::new(initial_candidates.clone()),
            initial_candidates,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Welcome! {count} candidate words to start."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type 'GUESS FEEDBACK' (e.g. 'crane _r*__') and press Enter".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            undo_stack: Vec::new(),
        }
    }

    /// Parse and submit the input buffer as one round
    pub fn submit_input(&mut self) {
        if self.session.state().is_terminal() {
            self.add_message(
                "Run finished - Ctrl-N for a new run, Esc to quit.",
                MessageStyle::Error,
            );
            return;
        }

        let line = self.input_buffer.trim().to_string();
        let input = match RoundInput::parse(&line) {
            Ok(input) => input,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let tiles = match &input {
            RoundInput::Feedback(feedback) => feedback_to_emoji(feedback),
            RoundInput::Solved => "🟩".repeat(WORD_LENGTH),
        };

        let snapshot = self.session.clone();
        let outcome = self.session.submit(&input).map(|report| {
            let entry = HistoryEntry {
                round: report.round,
                input: line.to_uppercase(),
                tiles,
                candidates_before: report.candidates_before,
                candidates_after: report.candidates_after(),
            };
            (entry, report.state, report.skipped)
        });

        let (entry, state, skipped) = match outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        self.undo_stack.push(snapshot);
        self.input_buffer.clear();
        self.report_skipped(&skipped);
        self.announce(&entry, state);
        self.history.push(entry);
    }

    fn report_skipped(&mut self, skipped: &[SkippedExclusion]) {
        for exclusion in skipped {
            self.add_message(
                &format!(
                    "Kept {} at position {}: it is the only letter left there",
                    exclusion.letter,
                    exclusion.position + 1
                ),
                MessageStyle::Warning,
            );
        }
    }

    fn announce(&mut self, entry: &HistoryEntry, state: SessionState) {
        match state {
            SessionState::Solved => {
                let celebration = match entry.round {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Ctrl-N for a new run or Esc to quit.", MessageStyle::Info);
            }
            SessionState::Exhausted => {
                self.add_message(
                    &format!(
                        "All {MAX_ROUNDS} rounds used - {} candidates left.",
                        entry.candidates_after
                    ),
                    MessageStyle::Error,
                );
            }
            SessionState::InProgress { .. } if entry.candidates_after == 0 => {
                self.add_message(
                    "No candidates remain - feedback may be incorrect. Ctrl-U to undo.",
                    MessageStyle::Error,
                );
            }
            SessionState::InProgress { .. } => {
                self.add_message(
                    &format!(
                        "{} → {} candidates",
                        entry.candidates_before, entry.candidates_after
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn new_run(&mut self) {
        self.session = Session::new(self.initial_candidates.clone());
        self.history.clear();
        self.undo_stack.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New run started!", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.session = snapshot;
            self.history.pop();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_run(),
            KeyCode::Char('u') if ctrl => self.undo_last(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if !ctrl => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
