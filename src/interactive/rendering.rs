//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and session statistics.

use super::app::{App, MessageStyle};
use crate::core::Outcome;
use crate::puzzle::{Attempt, Key, KeyStatus, Status, keyboard_layout};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn outcome_style(outcome: Option<Outcome>) -> Style {
    match outcome {
        Some(Outcome::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(Outcome::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(Outcome::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn attempt_line(attempt: &Attempt, cursor: Option<usize>) -> Line<'static> {
    let mut spans = Vec::with_capacity(attempt.slots().len() * 2);
    for slot in attempt.slots() {
        let letter = slot.letter().unwrap_or('·');
        let mut style = outcome_style(slot.outcome()).add_modifier(Modifier::BOLD);
        if cursor == Some(slot.position()) {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {letter} "), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let state = app.puzzle.state();
    let in_progress = state.status() == Status::InProgress;

    let mut lines = vec![Line::from("")];
    for (i, attempt) in app.puzzle.attempts().iter().enumerate() {
        let cursor = (in_progress && i == state.active_attempt()).then(|| state.active_slot());
        lines.push(attempt_line(attempt, cursor));
        lines.push(Line::from(""));
    }

    let (title, color) = match state.status() {
        Status::InProgress if state.hard_mode() => (" Board (hard mode) ", Color::Red),
        Status::InProgress => (" Board ", Color::White),
        Status::Won => (" Solved! ", Color::Green),
        Status::Lost => (" Out of guesses ", Color::Red),
    };

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    if let Some(message) = state.message() {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {message} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(board, area);
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        KeyStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        KeyStatus::Absent => Style::default().fg(Color::DarkGray),
        KeyStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.puzzle.keyboard();
    let lines: Vec<Line> = keyboard_layout()
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .flat_map(|key| {
                    let style = match key {
                        Key::Letter(ch) => key_style(keyboard.status(ch)),
                        Key::Enter | Key::Backspace => Style::default().fg(Color::Cyan),
                    };
                    [
                        Span::styled(format!(" {} ", key.label()), style.add_modifier(Modifier::BOLD)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!(
            "Played: {}   Win %: {:.0}",
            stats.total_games,
            stats.win_rate()
        )),
        Line::from(format!(
            "Streak: {}   Best: {}",
            stats.current_streak, stats.max_streak
        )),
        Line::from(""),
    ];

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    let rows = app
        .puzzle
        .state()
        .max_attempts()
        .max(stats.guess_distribution.len());
    for i in 0..rows {
        let count = stats.guess_distribution.get(i).copied().unwrap_or(0);
        let bar_len = (count * 16).div_ceil(most);
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
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
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = if app.puzzle.hard_mode() {
        "Mode: Hard"
    } else {
        "Mode: Normal"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let state = app.puzzle.state();
    let attempt_text = format!(
        "Guess: {}/{}",
        (app.puzzle.submitted_count() + 1).min(state.max_attempts()),
        state.max_attempts()
    );
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[1]);

    let help_text = if app.puzzle.is_over() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | TAB: Hard Mode | Ctrl-N: New | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
