//! TUI application state and logic

use crate::core::Word;
use crate::game::{FileTranscript, GameHost, GameResult, GameSession};
use crate::solver::{FrequencyStrategy, Solver};
use crate::wordlists::ALL_CATEGORIES;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Application state
pub struct App<'a> {
    pub host: &'a mut GameHost,
    pub session: Option<GameSession<FileTranscript>>,
    /// Category for new games; `None` draws from every category
    pub category: Option<String>,
    pub input_mode: InputMode,
    pub word_buffer: String,
    pub messages: Vec<Message>,
    pub hint: Option<char>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Each key press is a letter guess
    Letter,
    /// Typing a full-word guess
    FullWord,
    /// Round finished (or could not start); waiting for next action
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(host: &'a mut GameHost, category: Option<String>) -> Self {
        Self {
            host,
            session: None,
            category,
            input_mode: InputMode::RoundOver,
            word_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome to Hangman! Type letters to guess, TAB to guess the whole word."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            hint: None,
            should_quit: false,
        }
    }

    /// Label of the category new games are drawn from
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    pub fn new_game(&mut self) {
        self.abandon_current();
        self.word_buffer.clear();
        self.hint = None;

        match self.host.start(self.category.as_deref()) {
            Ok(session) => {
                let message = format!(
                    "New word from '{}' ({} letters)",
                    session.category(),
                    session.word().length()
                );
                self.session = Some(session);
                self.input_mode = InputMode::Letter;
                self.add_message(&message, MessageStyle::Info);
            }
            Err(e) => {
                self.session = None;
                self.input_mode = InputMode::RoundOver;
                self.add_message(&format!("Could not start a game: {e}"), MessageStyle::Error);
            }
        }
    }

    /// Switch to the next category, wrapping back to all categories
    pub fn cycle_category(&mut self) {
        let categories = self.host.repository().available_categories();
        let next = match &self.category {
            None => categories.first().map(|name| (*name).to_string()),
            Some(current) => categories
                .iter()
                .position(|name| name == current)
                .and_then(|i| categories.get(i + 1))
                .map(|name| (*name).to_string()),
        };
        self.category = next;

        let message = format!("Category: {}", self.category_label());
        self.add_message(&message, MessageStyle::Info);
    }

    pub fn guess_letter(&mut self, letter: char) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let result = session.guess_letter(&letter.to_string());
        self.hint = None;
        match result {
            Ok(outcome) => {
                let style = if outcome.is_correct() {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&format!("{letter}: {outcome}"), style);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.finish_if_over();
    }

    pub fn submit_word(&mut self) {
        if self.word_buffer.trim().is_empty() {
            self.add_message("Type a word first!", MessageStyle::Error);
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let result = session.guess_word(&self.word_buffer);
        self.word_buffer.clear();
        self.input_mode = InputMode::Letter;
        self.hint = None;
        match result {
            Ok(outcome) if outcome.is_correct() => {
                self.add_message(&outcome.to_string(), MessageStyle::Success);
            }
            Ok(outcome) => self.add_message(&outcome.to_string(), MessageStyle::Error),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.finish_if_over();
    }

    /// Ask the frequency solver for the best next letter
    pub fn show_hint(&mut self) {
        let Some(session) = &self.session else {
            return;
        };

        let pool = self.hint_pool();
        let solver = Solver::new(FrequencyStrategy, &pool);
        self.hint = solver.suggest_letter(&session.board());

        match self.hint {
            Some(letter) => {
                let remaining = solver.count_candidates(&session.board());
                self.add_message(
                    &format!("Hint: try '{letter}' ({remaining} candidates)"),
                    MessageStyle::Info,
                );
            }
            None => self.add_message("No hint available.", MessageStyle::Error),
        }
    }

    /// Words of the current category that could still be the answer
    #[must_use]
    pub fn candidates_count(&self) -> usize {
        let Some(session) = &self.session else {
            return 0;
        };
        let pool = self.hint_pool();
        Solver::new(FrequencyStrategy, &pool).count_candidates(&session.board())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.input_mode {
            InputMode::Letter => match key.code {
                KeyCode::Esc => self.quit(),
                KeyCode::Tab => {
                    self.input_mode = InputMode::FullWord;
                    self.add_message("Enter your full-word guess", MessageStyle::Info);
                }
                KeyCode::Char('?') => self.show_hint(),
                KeyCode::Char(c) => self.guess_letter(c),
                _ => {}
            },
            InputMode::FullWord => match key.code {
                KeyCode::Esc | KeyCode::Tab => {
                    self.input_mode = InputMode::Letter;
                    self.word_buffer.clear();
                }
                KeyCode::Char(c) => self.word_buffer.push(c),
                KeyCode::Backspace => {
                    self.word_buffer.pop();
                }
                KeyCode::Enter => self.submit_word(),
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('c') => self.cycle_category(),
                _ => {}
            },
        }
    }

    fn quit(&mut self) {
        self.abandon_current();
        self.should_quit = true;
    }

    fn abandon_current(&mut self) {
        if let Some(session) = self.session.take()
            && !session.state().is_terminal()
        {
            info!(session = session.id(), "game abandoned");
        }
    }

    fn finish_if_over(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.state().is_terminal() {
            return;
        }

        self.input_mode = InputMode::RoundOver;
        match self.host.complete(session) {
            Ok(outcome) if outcome.result == GameResult::Win => {
                let text = format!(
                    "🎉 You win! The word was '{}'. Score: {}",
                    outcome.word, outcome.score
                );
                self.add_message(&text, MessageStyle::Success);
            }
            Ok(outcome) => {
                let text = format!("💀 You lost! The word was '{}'.", outcome.word);
                self.add_message(&text, MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.add_message(
            "Press 'n' for new game, 'c' to change category or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    fn hint_pool(&self) -> Vec<Word> {
        let Some(session) = &self.session else {
            return Vec::new();
        };
        self.host
            .repository()
            .words_of_length(Some(session.category()), session.word().length())
            .into_iter()
            .cloned()
            .collect()
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

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Stats, StatsStore, TranscriptDir};
    use crate::wordlists::WordRepository;
    use crate::wordlists::loader::words_from_slice;
    use std::fs;
    use tempfile::TempDir;

    fn host(dir: &TempDir) -> GameHost {
        let repository = WordRepository::new([
            ("Animals".to_string(), words_from_slice(&["cat"])),
            ("Fruit".to_string(), words_from_slice(&["fig"])),
        ]);
        let transcripts = TranscriptDir::open(dir.path().join("game_log")).unwrap();
        let store = StatsStore::new(dir.path().join("game_log").join("stats.txt"));
        GameHost::new(repository, transcripts, store)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_keys(app: &mut App, keys: &str) {
        for c in keys.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn letters_win_and_record_stats() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);
        let mut app = App::new(&mut host, Some("Animals".to_string()));
        app.new_game();

        type_keys(&mut app, "cxat");

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "🎉 You win! The word was 'cat'. Score: 25")
        );
        drop(app);
        assert_eq!(
            *host.stats(),
            Stats {
                games_played: 1,
                wins: 1,
                losses: 0,
                total_score: 25,
            }
        );
    }

    #[test]
    fn full_word_mode() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);
        let mut app = App::new(&mut host, Some("Fruit".to_string()));
        app.new_game();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::FullWord);
        type_keys(&mut app, "fog");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_keys(&mut app, "ig");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(app.session.as_ref().unwrap().is_won());
    }

    #[test]
    fn losing_reveals_word() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);
        let mut app = App::new(&mut host, Some("Animals".to_string()));
        app.new_game();

        type_keys(&mut app, "bdeghi");

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "💀 You lost! The word was 'cat'.")
        );
        drop(app);
        assert_eq!(host.stats().losses, 1);
    }

    #[test]
    fn rejected_guesses_are_reported() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);
        let mut app = App::new(&mut host, Some("Animals".to_string()));
        app.new_game();

        type_keys(&mut app, "cc7");

        let texts: Vec<&str> = app.messages.iter().map(|m| m.text.as_str()).collect();
        assert!(texts.contains(&"You already guessed 'c'."));
        assert!(texts.contains(&"Invalid input."));
        assert_eq!(app.session.as_ref().unwrap().wrong_guesses(), 0);
    }

    #[test]
    fn hint_suggests_unguessed_letter() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);
        let mut app = App::new(&mut host, Some("Animals".to_string()));
        app.new_game();

        press(&mut app, KeyCode::Char('?'));

        assert_eq!(app.hint, Some('a'));
        assert_eq!(app.candidates_count(), 1);
        assert!(app.session.as_ref().unwrap().guessed_letters().is_empty());
    }

    #[test]
    fn quitting_mid_game_records_nothing() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);
        let mut app = App::new(&mut host, Some("Animals".to_string()));
        app.new_game();

        type_keys(&mut app, "c");
        press(&mut app, KeyCode::Esc);

        assert!(app.should_quit);
        assert!(app.session.is_none());
        drop(app);
        assert_eq!(*host.stats(), Stats::default());
        let log = fs::read_to_string(dir.path().join("game_log/game1/log.txt")).unwrap();
        assert!(!log.contains("Result:"));
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);
        let mut app = App::new(&mut host, None);
        app.new_game();
        press(&mut app, KeyCode::Tab);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(app.should_quit);
    }

    #[test]
    fn round_over_keys() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);
        let mut app = App::new(&mut host, None);
        assert_eq!(app.category_label(), "All");

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.category.as_deref(), Some("Animals"));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.category.as_deref(), Some("Fruit"));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.category, None);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Letter);
        assert_eq!(app.session.as_ref().unwrap().id(), 1);
    }

    #[test]
    fn start_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let transcripts = TranscriptDir::open(dir.path().join("game_log")).unwrap();
        let store = StatsStore::new(dir.path().join("stats.txt"));
        let mut host = GameHost::new(WordRepository::default(), transcripts, store);
        let mut app = App::new(&mut host, None);

        app.new_game();

        assert!(app.session.is_none());
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }
}
