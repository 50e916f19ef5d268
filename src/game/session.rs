//! Hangman game session
//!
//! A session owns one round: the target word, the guessed letters, the wrong-guess
//! counter and the transcript. It starts `InProgress` and moves to `Won` or `Lost` only
//! through guess evaluation; terminal sessions reject further guesses.

use super::transcript::{Transcript, TranscriptHeader};
use crate::core::{GuessError, GuessOutcome, Word, normalize_letter};
use crate::wordlists::{RepositoryError, SelectedWord, WordRepository};
use chrono::{DateTime, Local};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Wrong guesses allowed before the round is lost
pub const MAX_WRONG: u32 = 6;

/// Placeholder shown for unrevealed positions
pub const PLACEHOLDER: char = '_';

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Final result label of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => write!(f, "Win"),
            Self::Loss => write!(f, "Loss"),
        }
    }
}

/// Summary of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub session_id: u64,
    pub result: GameResult,
    pub score: u32,
    pub word: String,
    pub category: String,
    pub wrong_guesses: u32,
    pub elapsed: Duration,
}

/// Errors from closing a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("game {0} is still in progress")]
    InProgress(u64),
    #[error("game {0} was already finalized")]
    AlreadyFinalized(u64),
}

/// Read-only snapshot of what a player can see
///
/// `revealed` has one entry per character of the word: the character once revealed,
/// `None` while hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<'a> {
    pub revealed: Vec<Option<char>>,
    pub guessed: &'a BTreeSet<char>,
    pub wrong_letters: &'a [char],
}

/// One round of hangman
pub struct GameSession<T: Transcript> {
    id: u64,
    word: Word,
    category: String,
    guessed: BTreeSet<char>,
    correct: FxHashSet<char>,
    wrong_letters: Vec<char>,
    wrong_guesses: u32,
    started_at: DateTime<Local>,
    clock: Instant,
    transcript: T,
    finalized: bool,
}

impl<T: Transcript> GameSession<T> {
    /// Start a session on an already selected word and write the transcript header
    ///
    /// A header that cannot be written is logged and play continues.
    pub fn new(id: u64, selection: SelectedWord, mut transcript: T) -> Self {
        let SelectedWord {
            word,
            length,
            category,
        } = selection;

        let header = TranscriptHeader {
            session_id: id,
            category: &category,
            word: word.text(),
            word_length: length,
        };
        if let Err(e) = transcript.write_header(&header) {
            warn!(session = id, error = %e, "could not write transcript header");
        }

        info!(session = id, category = %category, length, "new game started");
        debug!(session = id, word = %word, "target word");

        Self {
            id,
            word,
            category,
            guessed: BTreeSet::new(),
            correct: FxHashSet::default(),
            wrong_letters: Vec::new(),
            wrong_guesses: 0,
            started_at: Local::now(),
            clock: Instant::now(),
            transcript,
            finalized: false,
        }
    }

    /// Draw a word from the repository and start a session on it
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::EmptyPool` if the resolved pool is empty.
    pub fn start(
        repository: &WordRepository,
        category: Option<&str>,
        id: u64,
        transcript: T,
    ) -> Result<Self, RepositoryError> {
        let selection = repository.random_word(category)?;
        Ok(Self::new(id, selection, transcript))
    }

    /// Guess a single letter
    ///
    /// The input is lowercased. Invalid input, a repeated letter, or a finished game
    /// is rejected without changing anything.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::InvalidInput`, `GuessError::Duplicate` or
    /// `GuessError::GameOver`.
    pub fn guess_letter(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.state().is_terminal() {
            return Err(GuessError::GameOver);
        }

        let letter = normalize_letter(input)?;
        if self.guessed.contains(&letter) {
            return Err(GuessError::Duplicate(letter));
        }

        self.guessed.insert(letter);
        let outcome = if self.word.contains(letter) {
            self.correct.insert(letter);
            GuessOutcome::Correct(letter)
        } else {
            self.wrong_guesses += 1;
            self.wrong_letters.push(letter);
            GuessOutcome::Wrong(letter)
        };

        let ordinal = self.guessed.len();
        debug!(session = self.id, ordinal, %letter, verdict = outcome.verdict(), "letter guess");
        self.record(&format!("{ordinal}. {letter} -> {}", outcome.verdict()));
        self.log_if_finished();

        Ok(outcome)
    }

    /// Guess the whole word
    ///
    /// The attempt is trimmed and lowercased. A match reveals every character; a miss
    /// costs one wrong guess. Full-word attempts are never checked for repeats.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::GameOver` once the session is finished.
    pub fn guess_word(&mut self, attempt: &str) -> Result<GuessOutcome, GuessError> {
        if self.state().is_terminal() {
            return Err(GuessError::GameOver);
        }

        let attempt = attempt.trim().to_lowercase();
        let outcome = if attempt == self.word.text() {
            self.correct.extend(self.word.letters().iter().copied());
            GuessOutcome::WordCorrect
        } else {
            self.wrong_guesses += 1;
            GuessOutcome::WordWrong
        };

        debug!(session = self.id, verdict = outcome.verdict(), "full-word guess");
        self.record(&format!(
            "Full-word guess '{attempt}' -> {}",
            outcome.verdict()
        ));
        self.log_if_finished();

        Ok(outcome)
    }

    /// Word with hidden positions masked, space separated: `c _ t`
    #[must_use]
    pub fn progress(&self) -> String {
        self.revealed()
            .into_iter()
            .map(|c| c.unwrap_or(PLACEHOLDER).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Per-position reveal state
    #[must_use]
    pub fn revealed(&self) -> Vec<Option<char>> {
        self.word
            .chars()
            .map(|c| self.correct.contains(&c).then_some(c))
            .collect()
    }

    /// Snapshot of the visible state
    #[must_use]
    pub fn board(&self) -> Board<'_> {
        Board {
            revealed: self.revealed(),
            guessed: &self.guessed,
            wrong_letters: &self.wrong_letters,
        }
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.is_won() {
            GameState::Won
        } else if self.is_lost() {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    /// Every character of the word has been revealed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.word.chars().all(|c| self.correct.contains(&c))
    }

    /// The wrong-guess budget is spent
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.wrong_guesses >= MAX_WRONG
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        MAX_WRONG.saturating_sub(self.wrong_guesses)
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    /// Wrong letters in the order they were guessed
    #[must_use]
    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    /// Every guessed letter, sorted
    #[must_use]
    pub const fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Score for the round: zero unless won, otherwise
    /// `max(0, length * 10 - wrong * 5)`
    #[must_use]
    pub fn compute_score(&self) -> u32 {
        if !self.is_won() {
            return 0;
        }
        let base = u32::try_from(self.word.length())
            .unwrap_or(u32::MAX)
            .saturating_mul(10);
        base.saturating_sub(self.wrong_guesses.saturating_mul(5))
    }

    /// Summary of the round once it has finished
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let result = match self.state() {
            GameState::InProgress => return None,
            GameState::Won => GameResult::Win,
            GameState::Lost => GameResult::Loss,
        };

        Some(Outcome {
            session_id: self.id,
            result,
            score: self.compute_score(),
            word: self.word.text().to_string(),
            category: self.category.clone(),
            wrong_guesses: self.wrong_guesses,
            elapsed: self.elapsed(),
        })
    }

    /// Close the transcript with the result block
    ///
    /// Appends a blank line then `Result:`, `Score:` and `Time:` lines. Must be called
    /// exactly once, after the round has finished. An abandoned session is simply
    /// dropped without calling this.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InProgress` before the round has finished and
    /// `SessionError::AlreadyFinalized` on a second call.
    pub fn finalize(&mut self) -> Result<Outcome, SessionError> {
        if self.finalized {
            return Err(SessionError::AlreadyFinalized(self.id));
        }
        let outcome = self.outcome().ok_or(SessionError::InProgress(self.id))?;

        self.record("");
        self.record(&format!("Result: {}", outcome.result));
        self.record(&format!("Score: {}", outcome.score));
        self.record(&format!("Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S%.6f")));
        self.finalized = true;

        Ok(outcome)
    }

    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        self.finalized
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    #[must_use]
    pub const fn transcript(&self) -> &T {
        &self.transcript
    }

    fn record(&mut self, line: &str) {
        if let Err(e) = self.transcript.append_line(line) {
            warn!(session = self.id, error = %e, "could not append to transcript");
        }
    }

    fn log_if_finished(&self) {
        match self.state() {
            GameState::Won => info!(session = self.id, score = self.compute_score(), "game won"),
            GameState::Lost => info!(session = self.id, "game lost"),
            GameState::InProgress => {}
        }
    }
}

impl<T: Transcript> fmt::Debug for GameSession<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("length", &self.word.length())
            .field("guessed", &self.guessed)
            .field("wrong_guesses", &self.wrong_guesses)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::transcript::{MemoryTranscript, TranscriptError};

    fn session(word: &str) -> GameSession<MemoryTranscript> {
        let word = Word::new(word).unwrap();
        let selection = SelectedWord {
            length: word.length(),
            word,
            category: "Animals".to_string(),
        };
        GameSession::new(1, selection, MemoryTranscript::new())
    }

    fn guess_lines(session: &GameSession<MemoryTranscript>) -> Vec<&str> {
        session.transcript().lines()[6..]
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn new_session_writes_header() {
        let session = session("cat");
        assert_eq!(
            session.transcript().lines(),
            [
                "Game 1 Log",
                "Category: Animals",
                "Word: cat",
                "Word Length: 3",
                "",
                "Guesses (in order):",
            ]
        );
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.remaining_attempts(), MAX_WRONG);
        assert_eq!(session.progress(), "_ _ _");
    }

    #[test]
    fn cat_scenario() {
        let mut session = session("cat");

        assert_eq!(session.guess_letter("c"), Ok(GuessOutcome::Correct('c')));
        assert_eq!(session.progress(), "c _ _");

        assert_eq!(session.guess_letter("z"), Ok(GuessOutcome::Wrong('z')));
        assert_eq!(session.wrong_guesses(), 1);

        assert_eq!(session.guess_letter("a"), Ok(GuessOutcome::Correct('a')));
        assert_eq!(session.progress(), "c a _");

        assert_eq!(session.guess_letter("t"), Ok(GuessOutcome::Correct('t')));
        assert_eq!(session.progress(), "c a t");
        assert!(session.is_won());
        assert_eq!(session.state(), GameState::Won);
        assert_eq!(session.compute_score(), 25);

        assert_eq!(
            guess_lines(&session),
            vec![
                "1. c -> Correct",
                "2. z -> Wrong",
                "3. a -> Correct",
                "4. t -> Correct"
            ]
        );
    }

    #[test]
    fn dog_loss_scenario() {
        let mut session = session("dog");

        for (i, letter) in ["q", "x", "z", "j", "v", "w"].iter().enumerate() {
            assert!(!session.is_lost());
            assert_eq!(session.wrong_guesses(), i as u32);
            assert!(matches!(
                session.guess_letter(letter),
                Ok(GuessOutcome::Wrong(_))
            ));
        }

        assert!(session.is_lost());
        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.remaining_attempts(), 0);
        assert_eq!(session.compute_score(), 0);
        assert_eq!(session.wrong_letters(), ['q', 'x', 'z', 'j', 'v', 'w']);
    }

    #[test]
    fn guesses_rejected_after_game_over() {
        let mut session = session("dog");
        for letter in ["q", "x", "z", "j", "v", "w"] {
            session.guess_letter(letter).unwrap();
        }

        assert_eq!(session.guess_letter("d"), Err(GuessError::GameOver));
        assert_eq!(session.guess_word("dog"), Err(GuessError::GameOver));
        assert_eq!(session.wrong_guesses(), MAX_WRONG);
    }

    #[test]
    fn duplicate_guess_changes_nothing() {
        let mut session = session("cat");

        assert_eq!(session.guess_letter("z"), Ok(GuessOutcome::Wrong('z')));
        let lines_before = session.transcript().lines().len();

        assert_eq!(session.guess_letter("Z"), Err(GuessError::Duplicate('z')));
        assert_eq!(session.wrong_guesses(), 1);
        assert_eq!(session.guessed_letters().len(), 1);
        assert_eq!(session.transcript().lines().len(), lines_before);

        assert_eq!(session.guess_letter("c"), Ok(GuessOutcome::Correct('c')));
        assert_eq!(session.guess_letter("c"), Err(GuessError::Duplicate('c')));
        assert_eq!(session.progress(), "c _ _");
    }

    #[test]
    fn invalid_letter_input_changes_nothing() {
        let mut session = session("cat");

        for input in ["", "ca", "1", "_", "!", " "] {
            assert_eq!(session.guess_letter(input), Err(GuessError::InvalidInput));
        }
        assert!(session.guessed_letters().is_empty());
        assert_eq!(session.wrong_guesses(), 0);
        assert_eq!(session.transcript().lines().len(), 6);
    }

    #[test]
    fn uppercase_letter_is_normalized() {
        let mut session = session("cat");
        assert_eq!(session.guess_letter("C"), Ok(GuessOutcome::Correct('c')));
        assert!(session.guessed_letters().contains(&'c'));
    }

    #[test]
    fn duplicate_letters_reveal_together() {
        let mut session = session("banana");
        session.guess_letter("a").unwrap();
        assert_eq!(session.progress(), "_ a _ a _ a");
        session.guess_letter("n").unwrap();
        assert_eq!(session.progress(), "_ a n a n a");
    }

    #[test]
    fn full_word_guess_wins_immediately() {
        let mut session = session("dog");
        session.guess_letter("x").unwrap();

        assert_eq!(session.guess_word("  DOG "), Ok(GuessOutcome::WordCorrect));
        assert!(session.is_won());
        assert_eq!(session.progress(), "d o g");
        assert_eq!(session.compute_score(), 25);
        assert_eq!(
            guess_lines(&session),
            vec!["1. x -> Wrong", "Full-word guess 'dog' -> Correct"]
        );
        // Letters revealed by a full-word guess are not marked as guessed
        assert_eq!(session.guessed_letters().len(), 1);
    }

    #[test]
    fn wrong_full_word_costs_one_attempt_and_may_repeat() {
        let mut session = session("dog");

        assert_eq!(session.guess_word("cat"), Ok(GuessOutcome::WordWrong));
        assert_eq!(session.guess_word("cat"), Ok(GuessOutcome::WordWrong));
        assert_eq!(session.wrong_guesses(), 2);
        assert!(session.wrong_letters().is_empty());
        assert_eq!(
            guess_lines(&session),
            vec![
                "Full-word guess 'cat' -> Wrong",
                "Full-word guess 'cat' -> Wrong"
            ]
        );
    }

    #[test]
    fn full_word_guesses_share_the_budget() {
        let mut session = session("dog");
        for letter in ["q", "x", "z"] {
            session.guess_letter(letter).unwrap();
        }
        for _ in 0..3 {
            session.guess_word("cow").unwrap();
        }
        assert!(session.is_lost());
    }

    #[test]
    fn ordinal_counts_guessed_letters_only() {
        let mut session = session("dog");
        session.guess_letter("d").unwrap();
        session.guess_word("dig").unwrap();
        session.guess_letter("o").unwrap();

        assert_eq!(
            guess_lines(&session),
            vec![
                "1. d -> Correct",
                "Full-word guess 'dig' -> Wrong",
                "2. o -> Correct"
            ]
        );
    }

    #[test]
    fn underscore_is_a_literal_character() {
        let mut session = session("polar_bear");
        for letter in ["p", "o", "l", "a", "r", "b", "e"] {
            session.guess_letter(letter).unwrap();
        }
        assert_eq!(session.progress(), "p o l a r _ b e a r");
        assert!(!session.is_won());

        session.guess_word("polar_bear").unwrap();
        assert!(session.is_won());
        assert_eq!(session.compute_score(), 100);
    }

    #[test]
    fn score_never_negative() {
        let mut session = session("ox");
        for letter in ["q", "z", "j", "v", "w"] {
            session.guess_letter(letter).unwrap();
        }
        session.guess_word("ox").unwrap();
        assert!(session.is_won());
        assert_eq!(session.compute_score(), 0);
    }

    #[test]
    fn won_progress_rebuilds_word() {
        let mut session = session("kangaroo");
        for letter in ["k", "a", "n", "g", "r", "o"] {
            session.guess_letter(letter).unwrap();
        }
        assert!(session.is_won());
        let progress = session.progress();
        assert!(!progress.contains(PLACEHOLDER));
        assert_eq!(progress.replace(' ', ""), "kangaroo");
    }

    #[test]
    fn board_reports_visible_state() {
        let mut session = session("cat");
        session.guess_letter("a").unwrap();
        session.guess_letter("q").unwrap();

        let board = session.board();
        assert_eq!(board.revealed, vec![None, Some('a'), None]);
        assert_eq!(board.wrong_letters, ['q']);
        assert_eq!(board.guessed.len(), 2);
    }

    #[test]
    fn finalize_appends_result_block() {
        let mut session = session("cat");
        for letter in ["c", "z", "a", "t"] {
            session.guess_letter(letter).unwrap();
        }

        let outcome = session.finalize().unwrap();
        assert_eq!(outcome.result, GameResult::Win);
        assert_eq!(outcome.score, 25);
        assert_eq!(outcome.word, "cat");
        assert_eq!(outcome.wrong_guesses, 1);

        let lines = session.transcript().lines();
        let tail = &lines[lines.len() - 4..];
        assert_eq!(tail[0], "");
        assert_eq!(tail[1], "Result: Win");
        assert_eq!(tail[2], "Score: 25");
        assert!(tail[3].starts_with("Time: "));
        assert!(session.is_finalized());
    }

    #[test]
    fn finalize_loss_scores_zero() {
        let mut session = session("dog");
        for letter in ["q", "x", "z", "j", "v", "w"] {
            session.guess_letter(letter).unwrap();
        }
        let outcome = session.finalize().unwrap();
        assert_eq!(outcome.result, GameResult::Loss);
        assert_eq!(outcome.score, 0);
        assert!(session.transcript().contents().contains("Result: Loss\nScore: 0\n"));
    }

    #[test]
    fn finalize_requires_finished_game_and_runs_once() {
        let mut session = session("cat");
        assert_eq!(session.finalize(), Err(SessionError::InProgress(1)));
        assert!(session.outcome().is_none());

        session.guess_word("cat").unwrap();
        assert!(session.finalize().is_ok());
        assert_eq!(session.finalize(), Err(SessionError::AlreadyFinalized(1)));
    }

    struct FailingTranscript;

    impl Transcript for FailingTranscript {
        fn write_header(&mut self, _: &TranscriptHeader<'_>) -> Result<(), TranscriptError> {
            Err(TranscriptError::Io {
                path: "unwritable".into(),
                source: std::io::Error::other("disk full"),
            })
        }

        fn append_line(&mut self, _: &str) -> Result<(), TranscriptError> {
            Err(TranscriptError::Io {
                path: "unwritable".into(),
                source: std::io::Error::other("disk full"),
            })
        }
    }

    #[test]
    fn transcript_failures_do_not_stop_play() {
        let word = Word::new("cat").unwrap();
        let selection = SelectedWord {
            length: 3,
            word,
            category: "Animals".to_string(),
        };
        let mut session = GameSession::new(9, selection, FailingTranscript);

        assert_eq!(session.guess_letter("c"), Ok(GuessOutcome::Correct('c')));
        assert_eq!(session.guess_word("cat"), Ok(GuessOutcome::WordCorrect));
        assert!(session.finalize().is_ok());
    }

    #[test]
    fn start_draws_from_repository() {
        let repository = WordRepository::new([(
            "Animals".to_string(),
            crate::wordlists::loader::words_from_slice(&["cat"]),
        )]);
        let session = GameSession::start(&repository, Some("Animals"), 4, MemoryTranscript::new())
            .unwrap();
        assert_eq!(session.word().text(), "cat");
        assert_eq!(session.category(), "Animals");
        assert_eq!(session.id(), 4);
    }

    #[test]
    fn start_on_empty_repository_fails() {
        let repository = WordRepository::default();
        let result = GameSession::start(&repository, None, 1, MemoryTranscript::new());
        assert!(matches!(result, Err(RepositoryError::EmptyPool { .. })));
    }
}
