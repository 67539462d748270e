//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, lives and the game-over screen.

use super::app::App;
use crate::core::Classification;
use crate::game::{Phase, RoundOutcome, Session};
use crate::output::formatters::round_counter;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Height of everything on the playing screen except the board
const FIXED_ROWS: u16 = 4 * 3 + 5 + 1;

/// Main UI rendering function
pub fn ui<R>(f: &mut Frame, app: &App<R>) {
    let session = &app.session;
    let background = if session.is_low_on_lives() {
        Style::default().bg(Color::Rgb(60, 10, 10))
    } else {
        Style::default()
    };
    f.render_widget(Block::default().style(background), f.area());

    if session.is_game_over() {
        render_game_over(f, session, f.area());
        return;
    }

    // The board never grows past what the fixed rows leave free
    let board_height = u16::try_from(session.config().max_attempts)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(f.area().height.saturating_sub(FIXED_ROWS));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(3),            // Lives
            Constraint::Length(3),            // Progress and played words
            Constraint::Length(3),            // Message
            Constraint::Length(board_height), // Board
            Constraint::Length(5),            // Keyboard
            Constraint::Min(1),               // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_lives(f, session, chunks[1]);
    render_progress(f, session, chunks[2]);
    render_message(f, session, chunks[3]);
    render_board(f, session, chunks[4]);
    render_keyboard(f, session, chunks[5]);
    render_help(f, chunks[6]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("PHIRLDLE")
        .style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(header, area);
}

fn render_lives<R>(f: &mut Frame, session: &Session<R>, area: Rect) {
    let color = if session.is_low_on_lives() {
        Color::Red
    } else {
        Color::Gray
    };

    let lives = Paragraph::new(session.lives().to_string())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Lives {}/{} ",
                    session.lives().alive(),
                    session.lives().size()
                ))
                .borders(Borders::ALL)
                .style(Style::default().fg(color)),
        );
    f.render_widget(lives, area);
}

fn render_progress<R>(f: &mut Frame, session: &Session<R>, area: Rect) {
    let mut spans = vec![Span::styled(
        round_counter(session.round_index(), session.word_count()),
        Style::default().fg(Color::DarkGray),
    )];

    for record in session.round_records() {
        let color = match record.outcome {
            RoundOutcome::Won => Color::Green,
            RoundOutcome::Lost => Color::Red,
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} ", record.word),
            Style::default()
                .fg(Color::White)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let progress = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(progress, area);
}

fn render_message<R>(f: &mut Frame, session: &Session<R>, area: Rect) {
    let color = match session.phase() {
        Phase::RoundResolved(RoundOutcome::Won) => Color::Green,
        Phase::RoundResolved(RoundOutcome::Lost) | Phase::GameOver(_) => Color::Red,
        Phase::Playing => Color::Yellow,
    };

    let message = Paragraph::new(session.message().to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

/// Style for a tile or key given its classification
#[must_use]
pub fn class_style(class: Option<Classification>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match class {
        Some(Classification::Correct) => base.fg(Color::White).bg(Color::Green),
        Some(Classification::Present) => base.fg(Color::White).bg(Color::Yellow),
        Some(Classification::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::Black).bg(Color::Gray),
    }
}

fn tile_row<'a>(tiles: impl Iterator<Item = (String, Style)>) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, (text, style)) in tiles.enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

fn render_board<R>(f: &mut Frame, session: &Session<R>, area: Rect) {
    let Some(secret) = session.secret() else {
        return;
    };
    let length = secret.len();
    let max_attempts = session.config().max_attempts;
    let empty = Style::default().fg(Color::White).bg(Color::Black);

    let mut rows: Vec<Line> = session
        .evaluated_history()
        .into_iter()
        .map(|(guess, feedback)| {
            tile_row(
                guess
                    .chars()
                    .zip(feedback.classifications().iter().copied())
                    .map(|(letter, class)| (format!(" {letter} "), class_style(Some(class)))),
            )
        })
        .collect();

    if rows.len() < max_attempts && session.phase() == Phase::Playing {
        let typed: Vec<char> = session.current_guess().chars().collect();
        rows.push(tile_row((0..length).map(|i| {
            let letter = typed.get(i).copied().unwrap_or('·');
            (format!(" {letter} "), empty.add_modifier(Modifier::BOLD))
        })));
    }

    // Padding rows past the bottom border would never be drawn
    let visible = max_attempts.min(usize::from(area.height.saturating_sub(2)));
    while rows.len() < visible {
        rows.push(tile_row((0..length).map(|_| ("   ".to_string(), empty))));
    }

    let board = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {length} letters "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<R>(f: &mut Frame, session: &Session<R>, area: Rect) {
    let statuses = session.letter_statuses();

    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            tile_row(row.bytes().map(|letter| {
                let style = class_style(statuses.get(&letter).copied());
                (format!(" {} ", letter as char), style)
            }))
        })
        .collect();

    // Enter and Backspace flank the bottom row, as on a physical keyboard
    if let Some(last) = lines.pop() {
        let key = class_style(None);
        let mut spans = vec![Span::styled(" ENTER ", key), Span::raw(" ")];
        spans.extend(last.spans);
        spans.push(Span::raw(" "));
        spans.push(Span::styled(" ← ", key));
        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Type letters | Enter: Submit | Backspace: Delete | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_game_over<R>(f: &mut Frame, session: &Session<R>, area: Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(area);

    let played: Vec<String> = session
        .played_words()
        .iter()
        .map(ToString::to_string)
        .collect();

    let content = vec![
        Line::from(Span::styled(
            session.message().to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(session.lives().to_string()),
        Line::from(format!("Words played: {}", played.join(" "))),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] I've told Alma, I want to try again.",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Esc to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" PHIRLDLE ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(panel, vertical[1]);
}
