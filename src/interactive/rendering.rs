//! TUI rendering with ratatui
//!
//! Gallows, masked word and guess feedback for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::game::{GameSession, GameState, MAX_WRONG, Transcript};
use crate::output::display::stats_line;
use crate::output::formatters::format_guessed;
use crate::output::gallows;
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
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Gallows
            Constraint::Percentage(55), // Word and messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_board_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.session {
        Some(session) => format!("HANGMAN - Game {} - {}", session.id(), session.category()),
        None => format!("HANGMAN - {}", app.category_label()),
    };
    let header = Paragraph::new(title)
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

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let wrong = app.session.as_ref().map_or(0, GameSession::wrong_guesses);
    let color = if wrong + 2 >= MAX_WRONG {
        Color::Red
    } else {
        Color::White
    };

    let drawing = Paragraph::new(gallows(wrong))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(drawing, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Word
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    match &app.session {
        Some(session) => {
            render_word(f, app, session, chunks[0]);
            render_attempts(f, session, chunks[1]);
        }
        None => {
            let idle = Paragraph::new("Press 'n' to start a game").block(
                Block::default()
                    .title(" Word ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
            f.render_widget(idle, chunks[0]);
        }
    }
    render_messages(f, app, chunks[2]);
}

fn render_word<T: Transcript>(f: &mut Frame, app: &App, session: &GameSession<T>, area: Rect) {
    let word_style = match session.state() {
        GameState::Won => Style::default().fg(Color::Green),
        GameState::Lost => Style::default().fg(Color::Red),
        GameState::InProgress => Style::default().fg(Color::Yellow),
    }
    .add_modifier(Modifier::BOLD);

    // Reveal the answer once the round is lost
    let shown = if session.is_lost() {
        session
            .word()
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        session.progress()
    };

    let mut content = vec![
        Line::from(Span::styled(shown, word_style)),
        Line::from(format!(
            "Guessed:    {}",
            format_guessed(session.guessed_letters())
        )),
        Line::from(format!("Candidates: {}", app.candidates_count())),
    ];
    if let Some(letter) = app.hint {
        content.push(Line::from(vec![
            Span::raw("Hint:       "),
            Span::styled(
                letter.to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" Word ({} letters) ", session.word().length()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_attempts<T: Transcript>(f: &mut Frame, session: &GameSession<T>, area: Rect) {
    let remaining = session.remaining_attempts();
    let percent = (remaining * 100 / MAX_WRONG) as u16;
    let color = if remaining <= 2 { Color::Red } else { Color::Green };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Remaining attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{MAX_WRONG}"));
    f.render_widget(gauge, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | n: New game | c: Change category | q: Quit ",
            "",
            Color::Green,
        ),
        InputMode::Letter => (
            " Type a letter | TAB: Guess word | ?: Hint | ESC: Quit ",
            "",
            Color::Yellow,
        ),
        InputMode::FullWord => (
            " Full-word guess | ENTER: Submit | ESC: Cancel ",
            app.word_buffer.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
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
    let status = Paragraph::new(stats_line(app.host.stats()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
