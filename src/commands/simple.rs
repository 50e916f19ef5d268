//! Simple interactive text mode
//!
//! Line-oriented hangman without the TUI: pick a category, guess letters or the whole
//! word, then see the cumulative stats.

use crate::core::PlayerInput;
use crate::game::{FileTranscript, GameHost, GameSession};
use crate::output::display::{
    write_category_menu, write_header, write_loss, write_message, write_new_word, write_state,
    write_stats, write_win,
};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::info;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// Won or lost; the session must be completed
    Finished,
    /// The player quit mid-round; nothing is recorded
    Abandoned,
}

/// Run the simple interactive mode on stdin/stdout
///
/// `category` skips the menu when it names a known category.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a session cannot
/// be started.
pub fn run_simple(host: &mut GameHost, category: Option<&str>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(host, category, &mut stdin.lock(), &mut stdout.lock())
}

/// Game loop over arbitrary input and output
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a session cannot
/// be started.
pub fn play<R: BufRead, W: Write>(
    host: &mut GameHost,
    category: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let fixed_category = category.and_then(|choice| {
        host.repository()
            .resolve_choice(choice)
            .map(str::to_string)
    });

    loop {
        let category = match &fixed_category {
            Some(name) => Some(name.clone()),
            None => choose_category(host, input, out)?,
        };

        let mut session = host.start(category.as_deref())?;
        let hints = host
            .repository()
            .words_of_length(Some(session.category()), session.word().length());
        let hints: Vec<&str> = hints.iter().map(|w| w.text()).collect();
        write_new_word(out, session.category(), session.word().length(), &hints)?;

        match play_round(&mut session, input, out)? {
            RoundEnd::Finished => {
                host.complete(&mut session)?;
            }
            RoundEnd::Abandoned => {
                info!(session = session.id(), "game abandoned");
                writeln!(out, "Exiting game...")?;
            }
        }
        write_stats(out, host.stats())?;

        let again = prompt(input, out, "\nPlay again? (y/n): ")?;
        if !again.is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")) {
            writeln!(out, "Thank you for playing!")?;
            return Ok(());
        }
    }
}

/// Show the category menu and read a choice; `None` means random
fn choose_category<R: BufRead, W: Write>(
    host: &GameHost,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>> {
    write_header(out, "Welcome to Hangman!")?;
    let repository = host.repository();
    write_category_menu(out, &repository.available_categories())?;

    let Some(choice) = prompt(input, out, "Enter number or name: ")? else {
        return Ok(None);
    };
    if choice.trim().is_empty() {
        return Ok(None);
    }

    match repository.resolve_choice(&choice) {
        Some(name) => Ok(Some(name.to_string())),
        None => {
            writeln!(out, "Invalid input, selecting random.")?;
            Ok(None)
        }
    }
}

/// Play guesses until the round is won, lost or abandoned
///
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_round<R: BufRead, W: Write>(
    session: &mut GameSession<FileTranscript>,
    input: &mut R,
    out: &mut W,
) -> Result<RoundEnd> {
    loop {
        write_state(out, session)?;

        let Some(line) = prompt(
            input,
            out,
            "\nEnter a letter (or 'guess' for full word, 'quit' to exit): ",
        )?
        else {
            return Ok(RoundEnd::Abandoned);
        };

        let result = match PlayerInput::parse(&line) {
            PlayerInput::Empty => continue,
            PlayerInput::Quit => return Ok(RoundEnd::Abandoned),
            PlayerInput::Invalid => {
                write_message(out, "Invalid input.", false)?;
                continue;
            }
            PlayerInput::Letter(letter) => session.guess_letter(&letter.to_string()),
            PlayerInput::FullWord => {
                let Some(attempt) = prompt(input, out, "Enter full-word guess: ")? else {
                    return Ok(RoundEnd::Abandoned);
                };
                session.guess_word(&attempt)
            }
        };

        match result {
            Ok(outcome) => write_message(out, &outcome.to_string(), outcome.is_correct())?,
            Err(e) => write_message(out, &e.to_string(), false)?,
        }

        if session.is_won() {
            write_win(out, session.word().text(), session.compute_score())?;
            return Ok(RoundEnd::Finished);
        }
        if session.is_lost() {
            write_loss(out, session.word().text())?;
            return Ok(RoundEnd::Finished);
        }
    }
}

/// Print `text`, flush, and read one line without its line ending
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Stats, StatsStore, TranscriptDir};
    use crate::wordlists::WordRepository;
    use crate::wordlists::loader::words_from_slice;
    use std::fs;
    use std::io::Cursor;
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

    fn run(host: &mut GameHost, category: Option<&str>, script: &str) -> String {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        play(host, category, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn winning_game_by_menu_number() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);

        let text = run(&mut host, None, "1\nc\nz\nc\na\nt\nn\n");

        assert!(text.contains("Welcome to Hangman!"));
        assert!(text.contains("New word selected from 'Animals' (length 3)"));
        assert!(text.contains("Wrong!"));
        assert!(text.contains("You already guessed 'c'."));
        assert!(text.contains("You win! The word was 'cat'. Score: 25"));
        assert!(text.contains("Games: 1 | Wins: 1 | Losses: 0"));
        assert!(text.ends_with("Thank you for playing!\n"));

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
    fn full_word_guess_wins() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);

        let text = run(&mut host, Some("fruit"), "guess\n FIG \nn\n");

        assert!(text.contains("Correct! You guessed the word!"));
        assert!(text.contains("Score: 30"));
        let log = fs::read_to_string(dir.path().join("game_log/game1/log.txt")).unwrap();
        assert!(log.contains("Full-word guess 'fig' -> Correct"));
    }

    #[test]
    fn losing_game_reveals_word() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);

        let text = run(&mut host, Some("Animals"), "q\nx\nz\nj\nv\nw\nn\n");

        assert!(text.contains("You lost! The word was 'cat'."));
        assert_eq!(host.stats().losses, 1);
    }

    #[test]
    fn quitting_records_nothing() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);

        let text = run(&mut host, Some("Animals"), "c\nquit\nn\n");

        assert!(text.contains("Exiting game..."));
        assert_eq!(*host.stats(), Stats::default());
        let log = fs::read_to_string(dir.path().join("game_log/game1/log.txt")).unwrap();
        assert!(!log.contains("Result:"));
    }

    #[test]
    fn invalid_input_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);

        let text = run(&mut host, Some("Animals"), "\n42\nquit\n");

        assert!(text.contains("Invalid input."));
        assert_eq!(host.stats().games_played, 0);
    }

    #[test]
    fn invalid_menu_choice_selects_random() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);

        let text = run(&mut host, None, "planets\nquit\nn\n");

        assert!(text.contains("Invalid input, selecting random."));
        assert!(text.contains("New word selected from 'All'"));
    }

    #[test]
    fn play_again_starts_next_session() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);

        run(&mut host, Some("Animals"), "guess\ncat\ny\nguess\ncat\nn\n");

        assert_eq!(host.stats().wins, 2);
        assert!(dir.path().join("game_log/game2/log.txt").exists());
    }

    #[test]
    fn end_of_input_abandons() {
        let dir = TempDir::new().unwrap();
        let mut host = host(&dir);

        let text = run(&mut host, Some("Animals"), "c\n");

        assert!(text.contains("Exiting game..."));
        assert_eq!(host.stats().games_played, 0);
    }
}
