//! TUI rendering with ratatui
//!
//! Panels for the constraint model, remaining candidates and round history.

use super::app::{App, MessageStyle};
use crate::core::{LetterSet, WORD_LENGTH, Word};
use crate::output::formatters::describe_position;
use crate::solver::{MAX_ROUNDS, SessionState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Constraints + candidates
            Constraint::Percentage(40), // History + messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE NARROWER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(WORD_LENGTH as u16 + 3), // Constraints
            Constraint::Min(3),                         // Candidates
        ])
        .split(area);

    render_constraints(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
}

fn position_style(set: LetterSet) -> Style {
    match set.len() {
        1 => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        26 => Style::default().fg(Color::DarkGray),
        _ => Style::default().fg(Color::Yellow),
    }
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let model = app.session.model();

    let mut lines: Vec<Line> = (0..WORD_LENGTH)
        .map(|position| {
            let set = model.position(position).letters();
            Line::from(vec![
                Span::raw(format!("{}: ", position + 1)),
                Span::styled(describe_position(set), position_style(set)),
            ])
        })
        .collect();

    let required = model.required();
    lines.push(Line::from(vec![
        Span::raw("Required: "),
        Span::styled(
            if required.is_empty() {
                "-".to_string()
            } else {
                required.to_string()
            },
            Style::default().fg(Color::Yellow),
        ),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Constraints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();

    let content = if candidates.is_empty() {
        "No candidates remain".to_string()
    } else {
        candidates
            .iter()
            .map(Word::text)
            .collect::<Vec<_>>()
            .join(" ")
    };

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" Candidates ({}) ", candidates.len()))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Rounds gauge
            Constraint::Percentage(50), // History
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_round_progress(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_round_progress(f: &mut Frame, app: &App, area: Rect) {
    let played = app.history.len().min(usize::from(MAX_ROUNDS));
    let percent = (played * 100 / usize::from(MAX_ROUNDS)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Rounds ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{played}/{MAX_ROUNDS} rounds | {}", app.session.state()));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|entry| {
            ListItem::new(format!(
                "{}: {} {} {} → {}",
                entry.round,
                entry.input,
                entry.tiles,
                entry.candidates_before,
                entry.candidates_after
            ))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.session.state() {
        SessionState::Solved => (
            " 🎉 CONGRATULATIONS! 🎉 | Ctrl-N for a new run or Esc to quit ".to_string(),
            Color::Green,
        ),
        SessionState::Exhausted => (
            " Out of rounds | Ctrl-N for a new run or Esc to quit ".to_string(),
            Color::Red,
        ),
        SessionState::InProgress { round } => (
            format!(" Round {round}: GUESS FEEDBACK ('_' absent, '*' elsewhere, letter = correct) "),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = Paragraph::new(format!(
        "Enter: Submit | Ctrl-U: Undo | Ctrl-N: New Run | Esc: Quit | {} candidates",
        app.session.candidates().len()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
